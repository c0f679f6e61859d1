//! The destination store: authoritative list plus mutation rules.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;
use wanderlist_core::constants::CONFLICT_PREVIEW_LIMIT;
use wanderlist_core::{Destination, Stats, StatusFilter, VisitStatus};
use wanderlist_geo::PlaceValidator;
use wanderlist_storage::{SnapshotStore, StorageError};

use crate::StoreError;


/// Outcome of a bulk add.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkAddReport {
    /// Number of records actually added.
    pub added: usize,
    /// Input names rejected because they already exist in the store,
    /// original casing, one entry per offending input.
    pub duplicates: Vec<String>,
}

/// Owns the canonical, ordered destination list (newest first).
///
/// Every mutation recomputes the full list, persists it as one snapshot, and
/// only then commits it to the observable state — a failed save leaves the
/// store exactly as it was. The single suspension point is the place lookup
/// inside [`add`](Self::add); the uniqueness invariant is re-checked under
/// the write guard after it resolves, so two in-flight adds of the same name
/// cannot both land.
pub struct DestinationStore {
    snapshots: Arc<dyn SnapshotStore>,
    validator: Arc<dyn PlaceValidator>,
    destinations: RwLock<Vec<Destination>>,
}

impl DestinationStore {
    /// Creates a store initialized from the adapter's last snapshot.
    #[must_use]
    pub fn new(snapshots: Arc<dyn SnapshotStore>, validator: Arc<dyn PlaceValidator>) -> Self {
        let destinations = snapshots.load();
        tracing::debug!(count = destinations.len(), "destination store loaded");
        Self { snapshots, validator, destinations: RwLock::new(destinations) }
    }

    /// Adds a single destination after checking it against the place-search
    /// service. The new record carries a derived maps link.
    pub async fn add(&self, name: &str) -> Result<Destination, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        // Cheap pre-check so an obvious duplicate skips the network call.
        if contains_name(&self.destinations.read().await, name) {
            return Err(StoreError::DuplicateName(name.to_owned()));
        }

        let check = self.validator.check(name).await;
        if !check.valid {
            return Err(StoreError::PlaceNotFound(name.to_owned()));
        }

        // The list may have changed while the lookup was in flight;
        // uniqueness is enforced here, under the write guard.
        let mut destinations = self.destinations.write().await;
        if contains_name(&destinations, name) {
            return Err(StoreError::DuplicateName(name.to_owned()));
        }

        let dest = Destination::new(name).with_maps_link();
        let mut next = destinations.clone();
        next.insert(0, dest.clone());
        self.snapshots.save(&next)?;
        *destinations = next;
        tracing::info!(name = %dest.name, id = %dest.id, "destination added");
        Ok(dest)
    }

    /// Adds many destinations at once, without per-name validation.
    ///
    /// Names already in the store are reported back as duplicates; repeats
    /// within the call are silently dropped after the first occurrence. The
    /// surviving batch is prepended in input order, first name frontmost.
    /// Bulk-added records intentionally carry no maps link.
    pub async fn bulk_add(&self, names: &[String]) -> Result<BulkAddReport, StoreError> {
        let mut destinations = self.destinations.write().await;
        let existing: HashSet<String> =
            destinations.iter().map(|d| d.name.to_lowercase()).collect();

        let mut seen_inputs: HashSet<String> = HashSet::new();
        let mut duplicates = Vec::new();
        let mut batch = Vec::new();
        for raw in names {
            let name = raw.trim();
            if name.is_empty() {
                continue;
            }
            let lower = name.to_lowercase();
            if existing.contains(&lower) {
                duplicates.push(name.to_owned());
            } else if seen_inputs.insert(lower) {
                batch.push(Destination::new(name));
            }
        }

        let added = batch.len();
        if added > 0 {
            let mut next = destinations.clone();
            next.splice(0..0, batch);
            self.snapshots.save(&next)?;
            *destinations = next;
            tracing::info!(added, skipped = duplicates.len(), "bulk add committed");
        }
        Ok(BulkAddReport { added, duplicates })
    }

    /// Sets a record's status to exactly the given value. Unknown ids are a
    /// no-op; returns whether a record was found.
    pub async fn toggle_status(
        &self,
        id: &str,
        status: VisitStatus,
    ) -> Result<bool, StoreError> {
        let mut destinations = self.destinations.write().await;
        let Some(index) = destinations.iter().position(|d| d.id == id) else {
            return Ok(false);
        };
        if destinations[index].status == status {
            return Ok(true);
        }
        let mut next = destinations.clone();
        next[index].status = status;
        self.snapshots.save(&next)?;
        *destinations = next;
        Ok(true)
    }

    /// Removes the record with the given id. Unknown ids are a no-op;
    /// returns whether a record was removed.
    pub async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut destinations = self.destinations.write().await;
        let mut next = destinations.clone();
        next.retain(|d| d.id != id);
        if next.len() == destinations.len() {
            return Ok(false);
        }
        self.snapshots.save(&next)?;
        *destinations = next;
        tracing::info!(id, "destination removed");
        Ok(true)
    }

    /// Replaces a record's notes verbatim; an empty string clears them.
    /// Unknown ids are a no-op; returns whether a record was found.
    pub async fn update_notes(&self, id: &str, notes: &str) -> Result<bool, StoreError> {
        let mut destinations = self.destinations.write().await;
        let Some(index) = destinations.iter().position(|d| d.id == id) else {
            return Ok(false);
        };
        let mut next = destinations.clone();
        next[index].notes = notes.to_owned();
        self.snapshots.save(&next)?;
        *destinations = next;
        Ok(true)
    }

    /// Serializes the full current list as a pretty-printed JSON document.
    pub async fn export_snapshot(&self) -> Result<String, StoreError> {
        let destinations = self.destinations.read().await;
        let json = serde_json::to_string_pretty(&*destinations).map_err(StorageError::from)?;
        Ok(json)
    }

    /// Replaces the whole list with a previously exported document.
    ///
    /// All-or-nothing: any name collision with the current list rejects the
    /// entire import and leaves the store untouched. Returns the number of
    /// imported records.
    pub async fn import_snapshot(&self, json: &str) -> Result<usize, StoreError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| StoreError::MalformedJson(e.to_string()))?;
        if !value.is_array() {
            return Err(StoreError::NotAnArray);
        }
        let imported: Vec<Destination> = serde_json::from_value(value)
            .map_err(|e| StoreError::MalformedJson(e.to_string()))?;

        let mut destinations = self.destinations.write().await;
        let current: HashSet<String> =
            destinations.iter().map(|d| d.name.to_lowercase()).collect();
        let mut colliding: Vec<String> = imported
            .iter()
            .filter(|d| current.contains(&d.name.to_lowercase()))
            .map(|d| d.name.clone())
            .collect();
        if !colliding.is_empty() {
            let truncated = colliding.len() > CONFLICT_PREVIEW_LIMIT;
            colliding.truncate(CONFLICT_PREVIEW_LIMIT);
            return Err(StoreError::ImportConflict { names: colliding, truncated });
        }

        let count = imported.len();
        self.snapshots.save(&imported)?;
        *destinations = imported;
        tracing::info!(count, "snapshot imported");
        Ok(count)
    }

    /// Clone of the current list, newest first.
    pub async fn destinations(&self) -> Vec<Destination> {
        self.destinations.read().await.clone()
    }

    /// Records passing the given status filter, in list order.
    pub async fn filtered(&self, filter: StatusFilter) -> Vec<Destination> {
        self.destinations
            .read()
            .await
            .iter()
            .filter(|d| filter.matches(d.status))
            .cloned()
            .collect()
    }

    /// The record with the given id, if present.
    pub async fn get(&self, id: &str) -> Option<Destination> {
        self.destinations.read().await.iter().find(|d| d.id == id).cloned()
    }

    /// Aggregate counters over the current list.
    pub async fn stats(&self) -> Stats {
        Stats::from_destinations(&self.destinations.read().await)
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.destinations.read().await.len()
    }

    /// Whether the list is empty.
    pub async fn is_empty(&self) -> bool {
        self.destinations.read().await.is_empty()
    }
}

/// Case-insensitive membership test over the list.
fn contains_name(destinations: &[Destination], name: &str) -> bool {
    let lower = name.to_lowercase();
    destinations.iter().any(|d| d.name.to_lowercase() == lower)
}
