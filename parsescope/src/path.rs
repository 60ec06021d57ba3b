// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path reconstruction from bubbling pointer-over notifications.
//!
//! A hover over the innermost region notifies that region first and then each
//! enclosing region in turn. [`PathReconstructor`] appends the rule name of every
//! notified region. The chain is only usable once the walk reaches the root, so
//! partial chains stay private. On reaching it the accumulated names are reversed
//! into root-to-leaf order, handed out as a [`RulePath`], and the accumulator is
//! emptied for the next hover.
//!
//! ```
//! use parsescope::path::{PathReconstructor, PathStep};
//! use parsescope::root::RootRule;
//!
//! let mut paths = PathReconstructor::new(RootRule::Named("Program".into()));
//! assert!(matches!(paths.accept("Expression", false), PathStep::Pending { depth: 1 }));
//! assert!(matches!(paths.accept("Statement", false), PathStep::Pending { depth: 2 }));
//! let PathStep::Complete(path) = paths.accept("Program", true) else { unreachable!() };
//! assert_eq!(path.to_string(), "Program > Statement > Expression");
//! assert!(paths.pending().is_empty());
//! ```

use core::fmt;

use parsescope_regions::{RegionId, RegionTree};
use tracing::{debug, trace};

use crate::root::RootRule;

/// A completed derivation path, outermost rule first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulePath {
    rules: Vec<String>,
}

impl RulePath {
    /// Build a path from rule names ordered root to leaf.
    pub fn from_root(rules: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    /// Rule names, root first.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// `(depth, rule)` pairs, root at depth `0`.
    pub fn levels(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.rules.iter().map(String::as_str).enumerate()
    }

    /// Innermost rule.
    pub fn leaf(&self) -> Option<&str> {
        self.rules.last().map(String::as_str)
    }

    /// Number of rules on the path.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True for a path with no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for RulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, rule) in self.levels() {
            if depth > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(rule)?;
        }
        Ok(())
    }
}

/// What a single pointer-over notification did to the accumulator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathStep {
    /// Appended; the walk must keep bubbling outward. `depth` is the number of
    /// rules accumulated so far.
    Pending {
        /// Rules accumulated so far.
        depth: usize,
    },
    /// The root was reached; the accumulator has been flushed into this path.
    Complete(RulePath),
}

/// Accumulates bubbling rule names into one root-to-leaf chain per hover.
#[derive(Clone, Debug)]
pub struct PathReconstructor {
    root: RootRule,
    // Innermost first, in notification order.
    accumulator: Vec<String>,
    flushes: usize,
}

impl PathReconstructor {
    /// Create an empty reconstructor that flushes at `root`.
    pub fn new(root: RootRule) -> Self {
        Self {
            root,
            accumulator: Vec::new(),
            flushes: 0,
        }
    }

    /// The root rule this reconstructor terminates on.
    pub fn root(&self) -> &RootRule {
        &self.root
    }

    /// Handle a pointer-over notification delivered to `region`.
    ///
    /// Stale regions are ignored and leave the accumulator untouched.
    pub fn on_pointer_over(&mut self, tree: &RegionTree, region: RegionId) -> PathStep {
        let Some(rule) = tree.rule_name(region) else {
            return PathStep::Pending {
                depth: self.accumulator.len(),
            };
        };
        let at_root = self.root.is_boundary(tree, region);
        self.accept(rule, at_root)
    }

    /// Append `rule` and, if `at_root`, flush the accumulated chain.
    pub fn accept(&mut self, rule: &str, at_root: bool) -> PathStep {
        self.accumulator.push(rule.to_owned());
        if !at_root {
            trace!(rule, depth = self.accumulator.len(), "accumulated rule");
            return PathStep::Pending {
                depth: self.accumulator.len(),
            };
        }
        let mut rules = core::mem::take(&mut self.accumulator);
        rules.reverse();
        self.flushes += 1;
        let path = RulePath { rules };
        debug!(path = %path, "reconstructed rule path");
        PathStep::Complete(path)
    }

    /// Rules accumulated since the last flush, innermost first.
    pub fn pending(&self) -> &[String] {
        &self.accumulator
    }

    /// Drop a partial chain whose walk ended without reaching the root.
    pub fn discard_pending(&mut self) -> Vec<String> {
        core::mem::take(&mut self.accumulator)
    }

    /// Number of completed paths so far.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}
