//! Shared constants for wanderlist.
//!
//! Centralizes values that would otherwise be duplicated across crates.

/// File name of the persisted snapshot (and of exported documents).
pub const SNAPSHOT_FILE_NAME: &str = "destinations.json";

/// Default base URL of the place-search service.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Base of the derived maps-search link attached to single-added records.
pub const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Default timeout for place-search HTTP calls, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Maximum number of colliding names spelled out in an import-conflict error;
/// anything beyond is reported as truncated.
pub const CONFLICT_PREVIEW_LIMIT: usize = 3;
