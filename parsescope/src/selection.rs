// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-selection highlighting.

use parsescope_regions::{RegionId, RegionTree};
use parsescope_responder::types::Outcome;
use tracing::debug;

/// Keeps at most one region marked as selected.
#[derive(Clone, Debug, Default)]
pub struct SelectionHighlighter {
    selected: Option<RegionId>,
}

impl SelectionHighlighter {
    /// A highlighter with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected region.
    pub fn selected(&self) -> Option<RegionId> {
        self.selected
    }

    /// Handle a click delivered to `region`.
    ///
    /// Clears the previous selection's mark, marks `region`, and records it.
    /// Always reports the click as handled so no default action follows and no
    /// enclosing region re-selects itself.
    pub fn on_click(&mut self, tree: &mut RegionTree, region: RegionId) -> Outcome {
        self.select(tree, region);
        Outcome::StopAndConsume
    }

    /// Make `region` the single marked region. Stale regions clear the selection.
    pub fn select(&mut self, tree: &mut RegionTree, region: RegionId) {
        if self.selected == Some(region) && tree.is_alive(region) {
            return;
        }
        if let Some(prev) = self.selected.take() {
            // The previous region may have been removed since; that is a no-op.
            tree.set_marked(prev, false);
        }
        if !tree.is_alive(region) {
            debug!(?region, "selection cleared: region is gone");
            return;
        }
        tree.set_marked(region, true);
        self.selected = Some(region);
        debug!(?region, rule = tree.rule_name(region), "selected region");
    }
}
