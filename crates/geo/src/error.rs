//! Typed error enum for the geocoding client.
//!
//! These errors never cross the `PlaceValidator` boundary; `check` consumes
//! them all into a fail-open result. They exist so the raw lookup path stays
//! inspectable in logs and tests.

use thiserror::Error;

/// Errors from the raw place-search call.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}")]
    HttpStatus { code: u16 },
    #[error("search response is not a JSON array: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}
