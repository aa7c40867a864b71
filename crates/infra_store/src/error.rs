//! Storage error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur at the snapshot boundary
///
/// The in-memory stores themselves cannot fail; only reading and writing
/// the snapshot file can.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Snapshot I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}
