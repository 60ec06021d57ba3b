// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading a region document from JSON.
//!
//! The highlighting step that produced the document is expected to emit each
//! rule match with its laid-out bounds:
//!
//! ```json
//! { "regions": [
//!   { "rule": "Program", "bounds": [0, 0, 200, 20], "children": [
//!     { "rule": "Statement", "bounds": [0, 0, 120, 20] }
//!   ] }
//! ] }
//! ```

use kurbo::Rect;
use parsescope_regions::{LocalRegion, RegionFlags, RegionId, RegionTree};
use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, VizError};

/// A whole document: top-level regions in document order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentSpec {
    /// Top-level regions.
    #[serde(default)]
    pub regions: Vec<RegionSpec>,
}

/// One rule match and the matches nested inside it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionSpec {
    /// Rule name.
    pub rule: String,
    /// `[x0, y0, x1, y1]` in document coordinates.
    pub bounds: [f64; 4],
    /// Whether the region can become a pointer target.
    #[serde(default = "default_pickable")]
    pub pickable: bool,
    /// Nested matches, in document order.
    #[serde(default)]
    pub children: Vec<RegionSpec>,
}

fn default_pickable() -> bool {
    true
}

impl DocumentSpec {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(VizError::Document)
    }

    /// Build the region tree, inserting regions in document order.
    ///
    /// Children whose bounds escape their parent are kept but logged, since
    /// hit testing descends by containment and will not reach the overhang.
    pub fn build(&self) -> RegionTree {
        let mut tree = RegionTree::new();
        for spec in &self.regions {
            insert(&mut tree, None, spec);
        }
        tree
    }
}

fn insert(tree: &mut RegionTree, parent: Option<RegionId>, spec: &RegionSpec) {
    let [x0, y0, x1, y1] = spec.bounds;
    let bounds = Rect::new(x0, y0, x1, y1).abs();
    if let Some(outer) = parent.and_then(|p| tree.bounds(p))
        && outer.union(bounds) != outer
    {
        warn!(rule = %spec.rule, ?bounds, ?outer, "region bounds escape the enclosing region");
    }
    let mut flags = RegionFlags::VISIBLE;
    flags.set(RegionFlags::PICKABLE, spec.pickable);
    let id = tree.insert(
        parent,
        LocalRegion {
            rule_name: spec.rule.clone(),
            bounds,
            flags,
        },
    );
    for child in &spec.children {
        insert(tree, Some(id), child);
    }
}
