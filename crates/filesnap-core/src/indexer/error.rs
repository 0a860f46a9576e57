//! Indexer error types

use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during a scan
#[derive(Debug, Error)]
pub enum IndexError {
    /// Directory walk failed (missing root, unreadable directory, ...)
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A discovered file could not be stat'ed or read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Root or database path could not be made absolute
    #[error("Failed to resolve paths: {0}")]
    Resolve(#[source] std::io::Error),

    /// Database error
    #[error(transparent)]
    Store(#[from] StoreError),
}
