// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsescope Regions: the region model of a parse-tree visualization.
//!
//! A grammar has already been applied to a document and each rule match has been
//! flattened into a nested, labeled region of the displayed text.
//! This crate holds those regions as a tree so that higher layers can ask where the pointer is
//! and which rules enclose it.
//!
//! - Every region carries exactly one rule name, its world-space bounds, and [`RegionFlags`].
//! - Nesting mirrors the derivation tree: a region's ancestor chain is its derivation path.
//! - Insertion order is document order; [`RegionTree::document_order`] walks it.
//! - [`RegionTree::hit_test_point`] finds the innermost region under a point.
//! - Inserts, removals, and mark changes accumulate [`Damage`] for the renderer.
//!
//! ## Not a layout engine
//!
//! This crate does not lay out text. Upstream code positions the highlighted
//! document and feeds the resulting boxes in. Children are expected to lie inside
//! their parent's bounds; hit testing descends by containment.
//!
//! ## API overview
//!
//! - [`RegionTree`]: container owning all regions.
//! - [`LocalRegion`]: per-region data (rule name, bounds, flags).
//! - [`RegionId`]: generational handle of a region.
//! - [`QueryFilter`]: restricts hit results (visible/pickable).
//!
//! ### Minimal usage
//!
//! ```
//! use parsescope_regions::{LocalRegion, QueryFilter, RegionTree};
//! use kurbo::{Point, Rect};
//!
//! let mut tree = RegionTree::new();
//! let program = tree.insert(None, LocalRegion::new("Program", Rect::new(0.0, 0.0, 200.0, 20.0)));
//! let stmt = tree.insert(Some(program), LocalRegion::new("Statement", Rect::new(0.0, 0.0, 80.0, 20.0)));
//!
//! let filter = QueryFilter { visible_only: true, pickable_only: true };
//! let hit = tree.hit_test_point(Point::new(10.0, 10.0), filter).unwrap();
//! assert_eq!(hit.region, stmt);
//! assert_eq!(tree.rule_path(hit.region), ["Program", "Statement"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod damage;
mod tree;
mod types;

pub use damage::Damage;
pub use tree::{DocumentOrder, Hit, QueryFilter, RegionTree};
pub use types::{LocalRegion, RegionFlags, RegionId};
