// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root rule discovery.

use parsescope_regions::{RegionId, RegionTree};

use crate::config::RootPolicy;
use crate::error::{Result, VizError};

/// Where a bubbling walk ends. Discovered once, immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootRule {
    /// Walks end at the first region carrying this rule name.
    Named(String),
    /// Walks end at regions with no enclosing region.
    TopLevel,
}

impl RootRule {
    /// Discover the root rule of `tree` under `policy`.
    ///
    /// With [`RootPolicy::FirstInDocument`] this takes the rule name of the first
    /// region in document order. Either policy fails with
    /// [`VizError::NoRegions`] when the document has no regions.
    pub fn discover(tree: &RegionTree, policy: RootPolicy) -> Result<Self> {
        let first = tree.first_in_document_order().ok_or(VizError::NoRegions)?;
        match policy {
            RootPolicy::FirstInDocument => {
                let name = tree.rule_name(first).ok_or(VizError::NoRegions)?;
                Ok(Self::Named(name.to_owned()))
            }
            RootPolicy::TopLevel => Ok(Self::TopLevel),
        }
    }

    /// True if a walk reaching `region` is complete.
    pub fn is_boundary(&self, tree: &RegionTree, region: RegionId) -> bool {
        match self {
            Self::Named(name) => tree.rule_name(region) == Some(name.as_str()),
            Self::TopLevel => tree.is_alive(region) && tree.parent(region).is_none(),
        }
    }

    /// The root rule name, when it is fixed.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name.as_str()),
            Self::TopLevel => None,
        }
    }
}
