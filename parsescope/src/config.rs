// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visualizer configuration.
//!
//! Every field has a default, so an empty JSON object is a valid configuration:
//!
//! ```
//! use parsescope::config::{PathFormat, RootPolicy, VizConfig};
//!
//! let cfg = VizConfig::from_json(r#"{ "format": "html" }"#).unwrap();
//! assert_eq!(cfg.format, PathFormat::Html);
//! assert_eq!(cfg.root, RootPolicy::FirstInDocument);
//! assert_eq!(cfg.indent_unit(), "&nbsp;");
//! ```

use parsescope_regions::QueryFilter;
use serde::Deserialize;

use crate::error::{Result, VizError};

/// How the root rule, and so the end of each bubbling walk, is determined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootPolicy {
    /// The rule name of the first region in document order. A walk ends at the
    /// first region (innermost outward) carrying that name.
    #[default]
    FirstInDocument,
    /// A walk ends at whichever region has no enclosing region. Tolerates
    /// documents with several independent top-level trees.
    TopLevel,
}

/// Output format of the rendered path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathFormat {
    /// One rule per line, indented with spaces.
    #[default]
    Text,
    /// Markup: each rule wrapped in a label styled by its rule name, lines
    /// separated by `<br/>`, indented with `&nbsp;`.
    Html,
}

/// Settings for a [`Visualizer`](crate::Visualizer).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VizConfig {
    /// Root rule policy.
    pub root: RootPolicy,
    /// Rendered path format.
    pub format: PathFormat,
    /// Indent unit override; see [`VizConfig::indent_unit`].
    pub indent_unit: Option<String>,
    /// Skip invisible regions during hit testing.
    pub visible_only: bool,
    /// Only pickable regions become hover or click targets.
    pub pickable_only: bool,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            root: RootPolicy::default(),
            format: PathFormat::default(),
            indent_unit: None,
            visible_only: true,
            pickable_only: true,
        }
    }
}

impl VizConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(VizError::Config)
    }

    /// The string repeated once per nesting level in the rendered path.
    pub fn indent_unit(&self) -> &str {
        match (&self.indent_unit, self.format) {
            (Some(unit), _) => unit.as_str(),
            (None, PathFormat::Text) => " ",
            (None, PathFormat::Html) => "&nbsp;",
        }
    }

    /// Hit-test filter derived from the picking settings.
    pub fn query_filter(&self) -> QueryFilter {
        QueryFilter {
            visible_only: self.visible_only,
            pickable_only: self.pickable_only,
        }
    }
}
