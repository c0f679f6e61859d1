//! In-memory snapshot store for tests and ephemeral runs.

use std::sync::{Mutex, PoisonError};

use wanderlist_core::Destination;

use crate::{SnapshotStore, StorageError};

/// Snapshot store that keeps the list in a mutex-guarded slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Vec<Destination>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot.
    #[must_use]
    pub fn with_snapshot(destinations: Vec<Destination>) -> Self {
        Self { slot: Mutex::new(destinations) }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Vec<Destination> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, destinations: &[Destination]) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = destinations.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert!(MemoryStore::new().load().is_empty());
    }

    #[test]
    fn test_save_replaces_slot() {
        let store = MemoryStore::new();
        store.save(&[Destination::new("Bergen"), Destination::new("Tromsø")]).unwrap();
        store.save(&[Destination::new("Bodø")]).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Bodø");
    }

    #[test]
    fn test_seeded_snapshot_loads() {
        let store = MemoryStore::with_snapshot(vec![Destination::new("Malmö")]);
        assert_eq!(store.load().len(), 1);
    }
}
