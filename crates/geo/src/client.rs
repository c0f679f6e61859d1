//! Geocoding HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use wanderlist_core::constants::DEFAULT_HTTP_TIMEOUT_SECS;

use crate::{GeoError, PlaceCheck, PlaceValidator};

/// User agent sent with every lookup (required by the Nominatim usage policy).
const USER_AGENT: &str = concat!("wanderlist/", env!("CARGO_PKG_VERSION"));

/// One entry of a place-search response. Only the fields we log are decoded.
#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    display_name: Option<String>,
}

/// Client for a Nominatim-compatible place-search endpoint.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoClient {
    /// Creates a client with the default lookup timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GeoError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// Creates a client with a custom lookup timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeoError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GeoError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Base URL of the place-search service.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw lookup: number of places matching the name.
    ///
    /// # Errors
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body is not a JSON array.
    async fn lookup(&self, name: &str) -> Result<usize, GeoError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("format", "json"), ("q", name)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::HttpStatus { code: status.as_u16() });
        }

        let body = response.text().await?;
        let hits: Vec<SearchHit> = serde_json::from_str(&body)?;
        if let Some(first) = hits.first() {
            tracing::debug!(name, top = ?first.display_name, count = hits.len(), "place lookup hit");
        }
        Ok(hits.len())
    }
}

#[async_trait]
impl PlaceValidator for GeoClient {
    async fn check(&self, name: &str) -> PlaceCheck {
        match self.lookup(name).await {
            Ok(hits) => PlaceCheck { valid: hits > 0 },
            Err(e) => {
                // Fail open: the check must never block the workflow.
                tracing::warn!(name, error = %e, "place lookup failed, treating name as valid");
                PlaceCheck { valid: true }
            },
        }
    }
}
