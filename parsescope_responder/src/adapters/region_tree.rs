// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Parsescope Regions.
//!
//! ## Feature
//!
//! Enable with `region_tree_adapter`.
//!
//! ## Notes
//!
//! These helpers convert region-tree queries into responder hits and let a
//! [`RegionTree`] act as the router's [`ParentLookup`].

use kurbo::Point;
use parsescope_regions::{QueryFilter, RegionId, RegionTree};

use crate::types::{ParentLookup, ResolvedHit};

impl ParentLookup<RegionId> for RegionTree {
    fn parent_of(&self, node: &RegionId) -> Option<RegionId> {
        self.parent(*node)
    }
}

/// Build a resolved hit for the innermost region under a point.
///
/// Returns `None` if no region matches the filter.
/// The path is populated from the hit test so the router does not need a
/// parent lookup.
pub fn top_hit_for_point(
    tree: &RegionTree,
    pt: Point,
    filter: QueryFilter,
) -> Option<ResolvedHit<RegionId, Point>> {
    let hit = tree.hit_test_point(pt, filter)?;
    Some(ResolvedHit {
        node: hit.region,
        path: Some(hit.path),
        meta: pt,
    })
}

/// Build a resolved hit for a region notified directly, without a pointer position.
///
/// Returns `None` if `region` is stale.
pub fn hit_for_region(tree: &RegionTree, region: RegionId) -> Option<ResolvedHit<RegionId, ()>> {
    if !tree.is_alive(region) {
        return None;
    }
    Some(ResolvedHit {
        node: region,
        path: Some(tree.path_to_root(region)),
        meta: (),
    })
}
