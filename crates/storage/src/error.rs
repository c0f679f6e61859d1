//! Typed error enum for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Persistence-layer error.
///
/// Loading never produces one of these: an absent or unreadable snapshot
/// falls back to an empty list. Only `save` can fail.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure while writing the snapshot.
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot could not be serialized.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
