// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visualizer: explicit state threaded through the hover and click handlers.
//!
//! ## Hover
//!
//! A pointer move is hit-tested against the document. When the innermost region
//! under the pointer changes, a pointer-over notification is routed from that
//! region outward. The [`PathReconstructor`] hears it on the target and on every
//! enclosing region, and halts propagation once the root is reached. Its completed
//! path is rendered into the output area.
//!
//! ## Click
//!
//! A click is routed the same way. The [`SelectionHighlighter`] handles the first
//! delivery (the innermost region), marks it, and consumes the click.

use kurbo::Point;
use parsescope_regions::{Damage, QueryFilter, RegionId, RegionTree};
use parsescope_responder::adapters::region_tree::{hit_for_region, top_hit_for_point};
use parsescope_responder::dispatch::run_dispatch;
use parsescope_responder::hover::HoverTracker;
use parsescope_responder::router::Router;
use parsescope_responder::types::{Outcome, ResolvedHit};
use tracing::{debug, error, trace, warn};

use crate::config::VizConfig;
use crate::error::{Result, VizError};
use crate::path::{PathReconstructor, PathStep, RulePath};
use crate::render::{PathRenderer, renderer_for};
use crate::root::RootRule;
use crate::selection::SelectionHighlighter;
use crate::surface::{Diagnostics, OutputArea};

/// Result of a routed click.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Selection after the click.
    pub selected: Option<RegionId>,
    /// True if the click was handled and its default action must not run.
    pub default_prevented: bool,
}

/// Interactive parse-tree visualizer over a region document.
///
/// Owns the document, the root rule, the path accumulator, the selection, and
/// the output area. All mutation happens through `&mut self` handlers, one
/// notification at a time.
#[derive(Debug)]
pub struct Visualizer<O> {
    tree: RegionTree,
    filter: QueryFilter,
    router: Router<RegionId>,
    hover: HoverTracker<RegionId>,
    paths: PathReconstructor,
    selection: SelectionHighlighter,
    renderer: Box<dyn PathRenderer>,
    last_path: Option<RulePath>,
    output: O,
}

impl<O: OutputArea> Visualizer<O> {
    /// Set up the visualizer over `tree`.
    ///
    /// Discovers the root rule once. If the document has no regions, the failure
    /// is reported through `diagnostics`, nothing else is set up, and the error is
    /// returned.
    pub fn new<D: Diagnostics + ?Sized>(
        tree: RegionTree,
        config: &VizConfig,
        output: O,
        diagnostics: &mut D,
    ) -> Result<Self> {
        let root = match RootRule::discover(&tree, config.root) {
            Ok(root) => root,
            Err(err) => {
                error!(%err, "root rule discovery failed");
                diagnostics.alert(&err.to_string());
                return Err(err);
            }
        };
        debug!(?root, regions = tree.len(), "visualizer ready");
        Ok(Self {
            tree,
            filter: config.query_filter(),
            router: Router::new(),
            hover: HoverTracker::new(),
            paths: PathReconstructor::new(root),
            selection: SelectionHighlighter::new(),
            renderer: renderer_for(config),
            last_path: None,
            output,
        })
    }

    /// Move the pointer to `pt` (document coordinates).
    ///
    /// Returns the rendered path if the move entered a new innermost region.
    pub fn pointer_move(&mut self, pt: Point) -> Option<RulePath> {
        let path = self
            .tree
            .hit_test_point(pt, self.filter)
            .map(|hit| hit.path)
            .unwrap_or_default();
        let change = self.hover.update_path(&path);
        trace!(
            left = change.left.len(),
            entered = change.entered.len(),
            "pointer moved"
        );
        let target = change.over?;
        let hit = ResolvedHit {
            node: target,
            path: Some(path),
            meta: pt,
        };
        self.dispatch_pointer_over(&hit)
    }

    /// The pointer left the document.
    pub fn pointer_leave(&mut self) {
        let left = self.hover.clear();
        trace!(left = left.len(), "pointer left the document");
    }

    /// Deliver a pointer-over notification to `region` and let it bubble.
    ///
    /// Unlike [`Visualizer::pointer_move`], this always notifies, so repeated
    /// calls for the same region rebuild the same path each time.
    pub fn pointer_over(&mut self, region: RegionId) -> Result<Option<RulePath>> {
        let hit = hit_for_region(&self.tree, region).ok_or(VizError::UnknownRegion(region))?;
        Ok(self.dispatch_pointer_over(&hit))
    }

    /// Click at `pt` (document coordinates). Clicks outside every region do nothing.
    pub fn click(&mut self, pt: Point) -> ClickOutcome {
        match top_hit_for_point(&self.tree, pt, self.filter) {
            Some(hit) => self.dispatch_click(&hit),
            None => ClickOutcome {
                selected: self.selection.selected(),
                default_prevented: false,
            },
        }
    }

    /// Deliver a click notification to `region`.
    pub fn click_region(&mut self, region: RegionId) -> Result<ClickOutcome> {
        let hit = hit_for_region(&self.tree, region).ok_or(VizError::UnknownRegion(region))?;
        Ok(self.dispatch_click(&hit))
    }

    /// The document.
    pub fn tree(&self) -> &RegionTree {
        &self.tree
    }

    /// The root rule discovered at setup.
    pub fn root_rule(&self) -> &RootRule {
        self.paths.root()
    }

    /// The currently selected region.
    pub fn selected(&self) -> Option<RegionId> {
        self.selection.selected()
    }

    /// The innermost hovered region, as tracked by [`Visualizer::pointer_move`].
    pub fn hovered(&self) -> Option<RegionId> {
        self.hover.target()
    }

    /// The most recently rendered path.
    pub fn last_path(&self) -> Option<&RulePath> {
        self.last_path.as_ref()
    }

    /// The output area.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Repaint damage from selection changes since the last call.
    pub fn take_damage(&mut self) -> Damage {
        self.tree.take_damage()
    }

    fn dispatch_pointer_over<M: Clone>(
        &mut self,
        hit: &ResolvedHit<RegionId, M>,
    ) -> Option<RulePath> {
        let seq = self.router.route(hit);
        let tree = &self.tree;
        let paths = &mut self.paths;
        let mut completed = None;
        let report = run_dispatch(&seq, |d| {
            if !d.phase.is_bubbling() {
                return Outcome::Continue;
            }
            match paths.on_pointer_over(tree, d.node) {
                PathStep::Pending { .. } => Outcome::Continue,
                PathStep::Complete(path) => {
                    completed = Some(path);
                    Outcome::Stop
                }
            }
        });
        if report.completed() && !self.paths.pending().is_empty() {
            let partial = self.paths.discard_pending();
            warn!(
                ?partial,
                "pointer-over walk ended without reaching the root rule; partial path discarded"
            );
        }
        let path = completed?;
        self.output.replace(&self.renderer.render(&path));
        self.last_path = Some(path.clone());
        Some(path)
    }

    fn dispatch_click<M: Clone>(&mut self, hit: &ResolvedHit<RegionId, M>) -> ClickOutcome {
        let seq = self.router.route(hit);
        let tree = &mut self.tree;
        let selection = &mut self.selection;
        let report = run_dispatch(&seq, |d| {
            if d.phase.is_bubbling() {
                selection.on_click(tree, d.node)
            } else {
                Outcome::Continue
            }
        });
        ClickOutcome {
            selected: self.selection.selected(),
            default_prevented: report.consumed,
        }
    }
}
