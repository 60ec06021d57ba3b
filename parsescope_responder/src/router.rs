// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! Reconstructs the ancestor path of a hit and emits dispatch steps.
//! Produces a capture → target → bubble sequence for the hit node:
//!
//! - Capture: outermost ancestor down to the target's parent.
//! - Target: the hit node, exactly once.
//! - Bubble: the target's parent back out to the outermost ancestor.
//!
//! The bubble half is what containment-based propagation looks like from the
//! inside: the innermost region is notified first, then every enclosing region in
//! turn. Listeners that rely on that order can run over the returned sequence with
//! [`run_dispatch`](crate::dispatch::run_dispatch).
//!
//! ## See Also
//!
//! [`hover`](crate::hover) for deciding when a pointer move should be routed at all.

use alloc::vec::Vec;

use crate::types::{Dispatch, NoParent, ParentLookup, Phase, ResolvedHit};

/// Deterministic propagation router.
///
/// ## Usage
///
/// - Construct with [`Router::new`] when callers always provide a full path in
///   [`ResolvedHit`], or with [`Router::with_parent`] to enable
///   path reconstruction via a [`ParentLookup`].
/// - Call [`Router::route`] for each notification.
pub struct Router<K, P: ParentLookup<K> = NoParent> {
    pub(crate) parent: P,
    pub(crate) _phantom: core::marker::PhantomData<fn() -> K>,
}

impl<K, P: ParentLookup<K>> core::fmt::Debug for Router<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Router").finish_non_exhaustive()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Default for Router<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + Default> Router<K, P> {
    /// Create a router with a default parent lookup.
    pub fn new() -> Self {
        Self::with_parent(P::default())
    }
}

impl<K: Copy + Eq, P: ParentLookup<K>> Router<K, P> {
    /// Create a router with an explicit parent lookup provider.
    pub fn with_parent(parent: P) -> Self {
        Self {
            parent,
            _phantom: core::marker::PhantomData,
        }
    }

    /// Produce the propagation sequence for a single hit.
    ///
    /// Uses the hit's path when present, otherwise reconstructs it with the
    /// parent lookup, falling back to a singleton path.
    pub fn route<M: Clone>(&self, hit: &ResolvedHit<K, M>) -> Vec<Dispatch<K, M>> {
        let path = match &hit.path {
            // A path must end at the hit node; anything else is rebuilt.
            Some(p) if p.last() == Some(&hit.node) => p.clone(),
            _ => Self::reconstruct_path(hit.node, &self.parent),
        };
        Self::emit_path(&path, &hit.meta)
    }

    fn reconstruct_path(target: K, parent_lookup: &impl ParentLookup<K>) -> Vec<K> {
        let mut out = Vec::new();
        let mut cur = target;
        // Collect to root; caller ensures acyclic ancestry.
        loop {
            out.push(cur);
            match parent_lookup.parent_of(&cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    fn emit_path<M: Clone>(path: &[K], meta: &M) -> Vec<Dispatch<K, M>> {
        let Some((&target, ancestors)) = path.split_last() else {
            return Vec::new();
        };
        let depth = ancestors.len();
        let step = |phase, node, depth_from_target| Dispatch {
            phase,
            node,
            depth_from_target,
            meta: Some(meta.clone()),
        };
        let mut out = Vec::with_capacity(2 * path.len() - 1);
        // Capture: root→parent
        for (i, &n) in ancestors.iter().enumerate() {
            out.push(step(Phase::Capture, n, depth - i));
        }
        out.push(step(Phase::Target, target, 0));
        // Bubble: parent→root
        for (i, &n) in ancestors.iter().rev().enumerate() {
            out.push(step(Phase::Bubble, n, i + 1));
        }
        out
    }
}
