//! Place validation for wanderlist
//!
//! A destination name is checked against a geocoding service before being
//! added. The check is a convenience guard against typos, not a source of
//! truth: any transport or decoding failure is absorbed and reported as
//! valid (fail-open), so connectivity problems never block the user.

mod client;
mod error;

pub use client::GeoClient;
pub use error::GeoError;

use async_trait::async_trait;

/// Outcome of a place-existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceCheck {
    /// Whether the name resembles a real place.
    pub valid: bool,
}

/// Best-effort place-existence check.
///
/// Infallible by construction: implementations must map their own failures to
/// `valid = true` rather than surfacing them.
#[async_trait]
pub trait PlaceValidator: Send + Sync {
    /// Checks whether the given name matches at least one known place.
    async fn check(&self, name: &str) -> PlaceCheck;
}
