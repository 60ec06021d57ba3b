// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsescope: interactive exploration of a parse tree rendered as nested regions.
//!
//! A grammar has been applied to a document upstream. Every rule match became a
//! region labeled with its rule name, nested the way the derivation nests. This
//! crate wires two behaviors onto that document:
//!
//! - **Hover**: pointing at a region reconstructs the chain of rules from the root
//!   rule down to the innermost region and shows it, indented one level per rule.
//! - **Click**: clicking a region marks it as the single selected region.
//!
//! Both ride on capture/target/bubble propagation from [`parsescope_responder`]
//! over the region tree in [`parsescope_regions`].
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use parsescope::{DocumentSpec, PathPanel, DiagnosticLog, Visualizer, VizConfig};
//!
//! let doc = DocumentSpec::from_json(r#"{ "regions": [
//!     { "rule": "Program", "bounds": [0, 0, 200, 20], "children": [
//!         { "rule": "Statement", "bounds": [0, 0, 120, 20], "children": [
//!             { "rule": "Expression", "bounds": [0, 0, 60, 20] }
//!         ] }
//!     ] }
//! ] }"#).unwrap();
//!
//! let mut diagnostics = DiagnosticLog::new();
//! let config = VizConfig::default();
//! let mut viz = Visualizer::new(doc.build(), &config, PathPanel::new(), &mut diagnostics).unwrap();
//!
//! viz.pointer_move(Point::new(10.0, 10.0));
//! assert_eq!(viz.output().content(), "Program\n Statement\n  Expression\n");
//!
//! let click = viz.click(Point::new(10.0, 10.0));
//! assert!(click.default_prevented);
//! assert_eq!(viz.tree().rule_name(click.selected.unwrap()), Some("Expression"));
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through `tracing`. Path flushes log at `debug`, each
//! accumulated rule at `trace`, a walk that never reaches the root at `warn`, and
//! a failed root discovery at `error`. Install any subscriber to see them.

pub mod config;
pub mod document;
pub mod error;
pub mod path;
pub mod render;
pub mod root;
pub mod selection;
pub mod surface;
pub mod visualizer;

pub use config::{PathFormat, RootPolicy, VizConfig};
pub use document::{DocumentSpec, RegionSpec};
pub use error::{Result, VizError};
pub use path::{PathReconstructor, PathStep, RulePath};
pub use render::{HtmlRenderer, PathRenderer, TextRenderer};
pub use root::RootRule;
pub use selection::SelectionHighlighter;
pub use surface::{DiagnosticLog, Diagnostics, OutputArea, PathPanel};
pub use visualizer::{ClickOutcome, Visualizer};
