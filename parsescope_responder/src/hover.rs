// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: decide when a pointer move enters a new innermost region.
//!
//! A pointer-over notification fires when the innermost node under the pointer
//! changes, including when the pointer leaves a child back into its parent.
//! Moving within the same innermost node is silent.
//!
//! ## Usage
//!
//! 1) Hit-test the pointer position and get the root→target path.
//! 2) Call [`HoverTracker::update_path`] with that path.
//! 3) If [`HoverChange::over`] is set, route a pointer-over notification for it.
//!
//! ```
//! use parsescope_responder::hover::HoverTracker;
//! let mut h: HoverTracker<u32> = HoverTracker::new();
//! let c = h.update_path(&[1, 2]);
//! assert_eq!(c.over, Some(2));
//! assert_eq!(c.entered, vec![1, 2]);
//!
//! // Same innermost node: nothing to report.
//! assert!(h.update_path(&[1, 2]).is_empty());
//!
//! // Back out to the parent: it becomes the new target.
//! let c = h.update_path(&[1]);
//! assert_eq!(c.left, vec![2]);
//! assert_eq!(c.over, Some(1));
//! ```

use alloc::vec::Vec;

/// Tracks the hovered root→target path across pointer moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker<K: Copy + Eq> {
    current: Vec<K>,
}

/// Transitions produced by one [`HoverTracker::update_path`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverChange<K> {
    /// Nodes the pointer left, inner-most to outer-most.
    pub left: Vec<K>,
    /// Nodes the pointer entered, outer-most to inner-most.
    pub entered: Vec<K>,
    /// The new innermost node, if it differs from the previous one.
    pub over: Option<K>,
}

impl<K> HoverChange<K> {
    /// True if the move changed nothing.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.entered.is_empty() && self.over.is_none()
    }
}

impl<K: Copy + Eq> HoverTracker<K> {
    /// Create a tracker with nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// Current root→target path (empty when nothing is hovered).
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Current innermost hovered node.
    pub fn target(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Forget the hovered path, returning the nodes left (inner-most first).
    pub fn clear(&mut self) -> Vec<K> {
        let left = self.current.iter().rev().copied().collect();
        self.current.clear();
        left
    }

    /// Move the pointer onto `new_path` (root→target; empty for "over nothing").
    pub fn update_path(&mut self, new_path: &[K]) -> HoverChange<K> {
        // Shared ancestry up to the lowest common ancestor.
        let lca = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let left = self.current[lca..].iter().rev().copied().collect();
        let entered = new_path[lca..].to_vec();
        let over = match new_path.last() {
            Some(&t) if self.target() != Some(t) => Some(t),
            _ => None,
        };

        self.current.clear();
        self.current.extend_from_slice(new_path);
        HoverChange {
            left,
            entered,
            over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn fresh_path_enters_outer_to_inner() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let c = h.update_path(&[1, 2, 3]);
        assert_eq!(c.entered, vec![1, 2, 3]);
        assert!(c.left.is_empty());
        assert_eq!(c.over, Some(3));
        assert_eq!(h.current_path(), &[1, 2, 3]);
    }

    #[test]
    fn sibling_change_leaves_inner_then_targets_sibling() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[1, 2, 3]);
        let c = h.update_path(&[1, 2, 4]);
        assert_eq!(c.left, vec![3]);
        assert_eq!(c.entered, vec![4]);
        assert_eq!(c.over, Some(4));
    }

    #[test]
    fn descending_into_child() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[1]);
        let c = h.update_path(&[1, 2]);
        assert!(c.left.is_empty());
        assert_eq!(c.entered, vec![2]);
        assert_eq!(c.over, Some(2));
    }

    #[test]
    fn leaving_everything_has_no_target() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[1, 2]);
        let c = h.update_path(&[]);
        assert_eq!(c.left, vec![2, 1]);
        assert_eq!(c.over, None);
        assert_eq!(h.target(), None);
    }

    #[test]
    fn disjoint_paths() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[1, 2, 3]);
        let c = h.update_path(&[4, 5]);
        assert_eq!(c.left, vec![3, 2, 1]);
        assert_eq!(c.entered, vec![4, 5]);
        assert_eq!(c.over, Some(5));
    }

    #[test]
    fn clear_returns_leaves() {
        let mut h: HoverTracker<u32> = HoverTracker::new();
        let _ = h.update_path(&[7, 8]);
        assert_eq!(h.clear(), vec![8, 7]);
        assert!(h.current_path().is_empty());
        // Re-entering after a clear targets again.
        assert_eq!(h.update_path(&[7, 8]).over, Some(8));
    }
}
