// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the responder: phases, outcomes, hits, lookups, and dispatch.
//!
//! ## Overview
//!
//! These types describe the propagation protocol and its inputs/outputs.
//! They are referenced by the [`router`](crate::router) and the [`dispatch`](crate::dispatch) loop.

use alloc::vec::Vec;

/// Phases of notification propagation.
///
/// Appears on each [`Dispatch`] item produced by
/// [`Router::route`](crate::router::Router::route).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Outermost ancestor down to the parent of the target.
    Capture,
    /// The target itself, delivered once.
    Target,
    /// Parent of the target back out to the outermost ancestor.
    Bubble,
}

impl Phase {
    /// True for the phases a bubbling listener observes ([`Target`](Self::Target) and
    /// [`Bubble`](Self::Bubble)).
    pub const fn is_bubbling(self) -> bool {
        matches!(self, Self::Target | Self::Bubble)
    }
}

/// Handler outcome controlling propagation.
///
/// Returned by per-node handlers to [`run_dispatch`](crate::dispatch::run_dispatch).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Keep propagating.
    Continue,
    /// Halt propagation: no further node in any phase sees this notification.
    Stop,
    /// Halt propagation and suppress the default action (e.g. navigation).
    StopAndConsume,
}

/// A resolved hit to be routed.
///
/// Typically obtained from a hit test against the document (see the
/// `region_tree_adapter` feature). It is the input to
/// [`Router::route`](crate::router::Router::route).
#[derive(Clone, Debug)]
pub struct ResolvedHit<K, M = ()> {
    /// Innermost node that received the pointer action.
    pub node: K,
    /// Optional root→target path; if absent, the router may consult [`ParentLookup`] to derive one.
    pub path: Option<Vec<K>>,
    /// Optional metadata carried alongside the hit (e.g. the pointer position).
    pub meta: M,
}

impl<K> ResolvedHit<K, ()> {
    /// A hit on `node` without a precomputed path or metadata.
    pub fn new(node: K) -> Self {
        Self {
            node,
            path: None,
            meta: (),
        }
    }
}

/// Look up the parent of a node to reconstruct a root→target path for propagation.
///
/// The [router](crate::router::Router) consults this when a [`ResolvedHit::path`] is absent, if you
/// construct it via [`Router::with_parent`](crate::router::Router::with_parent).
pub trait ParentLookup<K> {
    /// Returns the parent of `node`, or `None` if `node` is a root.
    fn parent_of(&self, node: &K) -> Option<K>;
}

impl<K, T: ParentLookup<K> + ?Sized> ParentLookup<K> for &T {
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }
}

/// A no‑op parent provider used by default when no parent lookup is needed.
///
/// Used by [`Router::new`](crate::router::Router::new). All calls to
/// [`ParentLookup::parent_of`] return `None`.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    #[inline]
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

/// A single dispatch item.
///
/// Produced by [`Router::route`](crate::router::Router::route) and fed to
/// [`run_dispatch`](crate::dispatch::run_dispatch), which invokes handlers in
/// [`Capture`](Phase::Capture), then [`Target`](Phase::Target), then [`Bubble`](Phase::Bubble) order.
#[derive(Clone, Debug)]
pub struct Dispatch<K, M = ()> {
    /// Propagation phase for this step.
    pub phase: Phase,
    /// Node associated with this dispatch step.
    pub node: K,
    /// Distance from the target: `0` for the target, `1` for its parent, and so on.
    pub depth_from_target: usize,
    /// Optional metadata (cloned from the hit).
    pub meta: Option<M>,
}
