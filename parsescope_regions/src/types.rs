// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the region tree: region identifiers, flags, and per-region data.

use alloc::string::String;
use kurbo::Rect;

/// Identifier for a region in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `RegionId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `RegionId`.
///
/// ### Liveness
///
/// Use [`RegionTree::is_alive`](crate::RegionTree::is_alive) to check whether a `RegionId`
/// still refers to a live region.
/// Stale `RegionId`s never alias a different live region because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(pub(crate) u32, pub(crate) u32);

impl RegionId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot index of this handle. Only meaningful together with [`RegionId::generation`].
    pub const fn slot(self) -> u32 {
        self.0
    }

    /// Generation of this handle.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Region flags controlling visibility, picking, and the selection mark.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region is visible (participates in rendering and hit testing).
        const VISIBLE  = 0b0000_0001;
        /// Region is pickable (may become the target of a pointer hit).
        const PICKABLE = 0b0000_0010;
        /// Region carries the selection mark (drawn with a distinct border).
        const MARKED   = 0b0000_0100;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Per-region data supplied on insert.
#[derive(Clone, Debug)]
pub struct LocalRegion {
    /// Name of the grammar rule this region matched.
    ///
    /// Used both as the region's identity in a derivation path and as its style key.
    pub rule_name: String,
    /// World-space bounds of the region's text. Use a conservative box for
    /// regions that wrap across lines; children are expected to lie inside.
    pub bounds: Rect,
    /// Visibility, picking, and mark flags.
    pub flags: RegionFlags,
}

impl LocalRegion {
    /// A visible, pickable, unmarked region labeled `rule_name`.
    pub fn new(rule_name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            rule_name: rule_name.into(),
            bounds,
            flags: RegionFlags::default(),
        }
    }
}

impl Default for LocalRegion {
    fn default() -> Self {
        Self::new(String::new(), Rect::ZERO)
    }
}
