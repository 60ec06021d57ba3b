// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Parsescope crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "region_tree_adapter")]
pub mod region_tree;
