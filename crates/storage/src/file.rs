//! JSON-file snapshot store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wanderlist_core::Destination;

use crate::{SnapshotStore, StorageError};

/// Snapshot store backed by a single pretty-printed JSON file.
///
/// Writes go through a sibling temp file and a rename, so the file on disk is
/// always a complete snapshot (last writer wins, never partial).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the given snapshot path. Nothing is touched on
    /// disk until the first `save`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Vec<Destination> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "snapshot unreadable, starting empty");
                return Vec::new();
            },
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "snapshot unparseable, starting empty");
                Vec::new()
            },
        }
    }

    fn save(&self, destinations: &[Destination]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| StorageError::Io { path: parent.to_path_buf(), source })?;
        }
        let json = serde_json::to_string_pretty(destinations)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StorageError::Io { path: tmp.clone(), source })?;
        fs::rename(&tmp, &self.path)
            .map_err(|source| StorageError::Io { path: self.path.clone(), source })?;
        tracing::debug!(path = %self.path.display(), count = destinations.len(), "snapshot saved");
        Ok(())
    }
}
