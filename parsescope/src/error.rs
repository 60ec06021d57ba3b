// Copyright 2025 the Parsescope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the visualizer, configuration, and document loading.

use parsescope_regions::RegionId;

/// Errors produced while setting up or driving a [`Visualizer`](crate::Visualizer).
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    /// The document contains no regions, so no root rule can be discovered.
    ///
    /// This is fatal: the visualizer performs no further setup.
    #[error("assertion: top-level region could not be found (the document has no labeled regions)")]
    NoRegions,

    /// A notification named a region that is not (or no longer) in the document.
    #[error("region {0:?} is not part of the document")]
    UnknownRegion(RegionId),

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    /// Document JSON could not be parsed.
    #[error("invalid document: {0}")]
    Document(#[source] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = VizError> = core::result::Result<T, E>;
