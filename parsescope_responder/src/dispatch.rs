// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher: deliver a routed sequence to handlers and honor stop/consume.
//!
//! The router only computes the traversal order. [`run_dispatch`] walks that order,
//! calls a handler per step, and stops as soon as a handler asks it to.
//! A stop applies to the whole notification, not just the current phase: once a
//! region halts propagation, nothing further out hears about it.
//!
//! ```
//! use parsescope_responder::dispatch::run_dispatch;
//! use parsescope_responder::router::Router;
//! use parsescope_responder::types::{Outcome, Phase, ResolvedHit};
//!
//! let router: Router<u32> = Router::new();
//! let hit = ResolvedHit { node: 3, path: Some(vec![1, 2, 3]), meta: () };
//! let seq = router.route(&hit);
//!
//! let mut heard = Vec::new();
//! let report = run_dispatch(&seq, |d| {
//!     if d.phase == Phase::Capture {
//!         return Outcome::Continue;
//!     }
//!     heard.push(d.node);
//!     if d.node == 2 { Outcome::Stop } else { Outcome::Continue }
//! });
//! assert_eq!(heard, [3, 2]);
//! assert_eq!(report.stopped_at, Some(2));
//! assert!(!report.consumed);
//! ```

use crate::types::{Dispatch, Outcome};

/// Summary of a finished dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DispatchReport<K> {
    /// Number of steps delivered to the handler.
    pub delivered: usize,
    /// Node whose handler halted propagation, if any.
    pub stopped_at: Option<K>,
    /// True if a handler returned [`Outcome::StopAndConsume`].
    pub consumed: bool,
}

impl<K> DispatchReport<K> {
    /// True if the sequence ran to the end without a handler halting it.
    pub fn completed(&self) -> bool {
        self.stopped_at.is_none()
    }
}

/// Walk the dispatch sequence produced by the router, in order.
///
/// `deliver` is called once per step and its [`Outcome`] decides whether later
/// steps are delivered.
pub fn run_dispatch<K: Copy, M>(
    seq: &[Dispatch<K, M>],
    mut deliver: impl FnMut(&Dispatch<K, M>) -> Outcome,
) -> DispatchReport<K> {
    let mut report = DispatchReport {
        delivered: 0,
        stopped_at: None,
        consumed: false,
    };
    for d in seq {
        report.delivered += 1;
        match deliver(d) {
            Outcome::Continue => {}
            Outcome::Stop => {
                report.stopped_at = Some(d.node);
                break;
            }
            Outcome::StopAndConsume => {
                report.stopped_at = Some(d.node);
                report.consumed = true;
                break;
            }
        }
    }
    report
}
