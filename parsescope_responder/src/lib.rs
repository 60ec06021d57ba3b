// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsescope Responder: deterministic, `no_std` propagation of region notifications.
//!
//! ## Overview
//!
//! A pointer action lands on the innermost region under the pointer and then travels
//! outward through every enclosing region until some listener halts it.
//! This crate makes that travel explicit instead of relying on a host toolkit's event bubbling:
//!
//! - [`Router`](crate::router::Router) turns a [`ResolvedHit`](crate::types::ResolvedHit)
//!   into a capture → target → bubble sequence by walking the ancestor chain.
//! - [`run_dispatch`](crate::dispatch::run_dispatch) delivers that sequence to a handler
//!   in order and honors [`Outcome::Stop`](crate::types::Outcome::Stop) and
//!   [`Outcome::StopAndConsume`](crate::types::Outcome::StopAndConsume).
//! - [`HoverTracker`](crate::hover::HoverTracker) decides when a pointer move enters a new
//!   innermost region and so deserves a pointer-over notification.
//!
//! It does not perform hit testing. Enable `region_tree_adapter` to build hits from a
//! `parsescope_regions::RegionTree`.
//!
//! ## Ordering guarantee
//!
//! Within one notification, bubbling listeners see the target first and then each
//! ancestor in turn, outermost last. Delivery is synchronous: a handler returns
//! before the next one runs, so a listener that accumulates across steps never
//! observes interleaved notifications.
//!
//! ```
//! use parsescope_responder::dispatch::run_dispatch;
//! use parsescope_responder::router::Router;
//! use parsescope_responder::types::{Outcome, ParentLookup, ResolvedHit};
//!
//! struct Parents;
//! impl ParentLookup<u32> for Parents {
//!     fn parent_of(&self, n: &u32) -> Option<u32> { (*n > 1).then(|| n - 1) }
//! }
//!
//! let router = Router::with_parent(Parents);
//! let seq = router.route(&ResolvedHit::new(3_u32));
//! let mut bubbled = Vec::new();
//! run_dispatch(&seq, |d| {
//!     if d.phase.is_bubbling() {
//!         bubbled.push(d.node);
//!     }
//!     Outcome::Continue
//! });
//! assert_eq!(bubbled, [3, 2, 1]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod dispatch;
pub mod hover;
pub mod router;
pub mod types;
