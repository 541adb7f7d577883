// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatementError {
    /// Bad style name, non-positive counts, degenerate ratio mix. Fatal:
    /// no output is produced for the offending item.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The optional enrichment call-out failed (network, auth, malformed
    /// response). Always recovered internally by catalog fallback; callers
    /// outside the adapter never see this variant.
    #[error("enrichment unavailable: {0}")]
    EnrichmentUnavailable(String),

    /// The renderer could not produce the document file. Per-item: a batch
    /// records the failure and continues.
    #[error("render failure at {}: {source}", path.display())]
    RenderFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
