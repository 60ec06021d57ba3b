// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repaint damage accumulated by the region tree.

use alloc::vec::Vec;
use kurbo::Rect;

/// World-space rectangles that should be repainted.
///
/// Collected by [`RegionTree`](crate::RegionTree) whenever a change affects how a
/// region is drawn (inserts, removals and mark changes) and drained with
/// [`RegionTree::take_damage`](crate::RegionTree::take_damage).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// World-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// True if nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    pub(crate) fn push(&mut self, rect: Rect) {
        // Zero-area regions never paint anything.
        if rect.width() > 0.0 && rect.height() > 0.0 {
            self.dirty_rects.push(rect);
        }
    }
}
