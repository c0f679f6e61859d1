//! Snapshot storage abstraction.
//!
//! Provides a common interface for the file-backed store and the in-memory
//! fake. Enables substituting persistence in tests (dependency injection).

use wanderlist_core::Destination;

use crate::StorageError;

/// Full-snapshot persistence for the destination list.
///
/// Both operations are synchronous: the store persists inline with each
/// mutation, so the observable list and the saved snapshot only ever diverge
/// inside a single pending mutation.
pub trait SnapshotStore: Send + Sync {
    /// Returns the last-saved list.
    ///
    /// An absent slot or unparseable content yields an empty list (logged,
    /// never an error) so startup always succeeds.
    fn load(&self) -> Vec<Destination>;

    /// Replaces the stored snapshot with the given list.
    fn save(&self, destinations: &[Destination]) -> Result<(), StorageError>;
}
