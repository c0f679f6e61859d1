//! Destination records and their visitation status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use uuid::Uuid;

use crate::constants::MAPS_SEARCH_URL;

/// A single tracked place.
///
/// Field order matches the persisted JSON layout; wire names are camelCase
/// (`createdAt`, `mapsLink`). `notes` and `mapsLink` are optional on the wire
/// so that externally produced documents still decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique identifier, stable for the record's lifetime.
    pub id: String,
    /// User-supplied place name, trimmed. Uniqueness is case-insensitive.
    pub name: String,
    /// Free-form notes; empty string means "no notes".
    #[serde(default)]
    pub notes: String,
    /// Visitation status.
    pub status: VisitStatus,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
    /// Derived maps-search link. Absent on bulk-added records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_link: Option<String>,
}

impl Destination {
    /// Creates a new never-visited record with a fresh id and no maps link.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            notes: String::new(),
            status: VisitStatus::NeverVisited,
            created_at: Utc::now(),
            maps_link: None,
        }
    }

    /// Attaches the maps-search link derived from the record's name.
    #[must_use]
    pub fn with_maps_link(mut self) -> Self {
        self.maps_link = Some(maps_link_for(&self.name));
        self
    }

    /// Whether the record carries any non-whitespace notes.
    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}

/// Builds the maps-search URL for a place name.
#[must_use]
pub fn maps_link_for(name: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", name)
        .finish();
    format!("{MAPS_SEARCH_URL}?{query}")
}

/// Visitation status of a destination.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VisitStatus {
    /// Not yet visited (the default for new records).
    #[default]
    NeverVisited,
    /// Visited.
    Visited,
}

impl VisitStatus {
    /// Wire representation, identical to the serde rename.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NeverVisited => "never-visited",
            Self::Visited => "visited",
        }
    }
}

impl std::str::FromStr for VisitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never-visited" => Ok(Self::NeverVisited),
            "visited" => Ok(Self::Visited),
            other => Err(format!("unknown visit status: {}", other)),
        }
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-side filter over the destination list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every record.
    #[default]
    All,
    /// Only never-visited records.
    NeverVisited,
    /// Only visited records.
    Visited,
}

impl StatusFilter {
    /// Whether a record with the given status passes this filter.
    #[must_use]
    pub fn matches(&self, status: VisitStatus) -> bool {
        match self {
            Self::All => true,
            Self::NeverVisited => status == VisitStatus::NeverVisited,
            Self::Visited => status == VisitStatus::Visited,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "never-visited" => Ok(Self::NeverVisited),
            "visited" => Ok(Self::Visited),
            other => Err(format!("unknown filter: {} (expected all, visited, never-visited)", other)),
        }
    }
}

/// Aggregate counters over the destination list.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Stats {
    /// Total number of records.
    pub total: usize,
    /// Number of visited records.
    pub visited: usize,
    /// Visited share, rounded to the nearest whole percent. 0 on an empty list.
    pub percent: u8,
}

impl Stats {
    /// Computes counters for the given list.
    #[must_use]
    pub fn from_destinations(destinations: &[Destination]) -> Self {
        let total = destinations.len();
        let visited =
            destinations.iter().filter(|d| d.status == VisitStatus::Visited).count();
        let percent = if total == 0 {
            0
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                reason = "share is bounded [0,100]"
            )]
            let p = ((visited as f64 / total as f64) * 100.0).round() as u8;
            p
        };
        Self { total, visited, percent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let dest = Destination::new("Lisbon");
        assert_eq!(dest.name, "Lisbon");
        assert_eq!(dest.status, VisitStatus::NeverVisited);
        assert_eq!(dest.notes, "");
        assert!(dest.maps_link.is_none());
        assert!(!dest.has_notes());
    }

    #[test]
    fn test_with_maps_link_encodes_name() {
        let dest = Destination::new("Rio de Janeiro").with_maps_link();
        let link = dest.maps_link.unwrap();
        assert!(link.starts_with(MAPS_SEARCH_URL));
        assert!(link.contains("api=1"));
        assert!(link.contains("query=Rio+de+Janeiro"));
    }

    #[test]
    fn test_has_notes_ignores_whitespace() {
        let mut dest = Destination::new("Oslo");
        dest.notes = "   ".to_owned();
        assert!(!dest.has_notes());
        dest.notes = "fjord cruise".to_owned();
        assert!(dest.has_notes());
    }

    #[test]
    fn test_wire_field_names() {
        let dest = Destination::new("Kyoto").with_maps_link();
        let json = serde_json::to_value(&dest).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("mapsLink").is_some());
        assert_eq!(json.get("status").unwrap(), "never-visited");
    }

    #[test]
    fn test_maps_link_omitted_when_absent() {
        let dest = Destination::new("Quito");
        let json = serde_json::to_value(&dest).unwrap();
        assert!(json.get("mapsLink").is_none());
    }

    #[test]
    fn test_decode_without_optional_fields() {
        let json = r#"{
            "id": "abc",
            "name": "Hanoi",
            "status": "visited",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.notes, "");
        assert!(dest.maps_link.is_none());
        assert_eq!(dest.status, VisitStatus::Visited);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [VisitStatus::NeverVisited, VisitStatus::Visited] {
            let parsed: VisitStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("seen".parse::<VisitStatus>().is_err());
    }

    #[test]
    fn test_filter_matches() {
        assert!(StatusFilter::All.matches(VisitStatus::Visited));
        assert!(StatusFilter::All.matches(VisitStatus::NeverVisited));
        assert!(StatusFilter::Visited.matches(VisitStatus::Visited));
        assert!(!StatusFilter::Visited.matches(VisitStatus::NeverVisited));
        assert!(StatusFilter::NeverVisited.matches(VisitStatus::NeverVisited));
    }

    #[test]
    fn test_stats() {
        let mut list = vec![
            Destination::new("Rome"),
            Destination::new("Milan"),
            Destination::new("Turin"),
        ];
        list[0].status = VisitStatus::Visited;
        let stats = Stats::from_destinations(&list);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.visited, 1);
        assert_eq!(stats.percent, 33);

        assert_eq!(Stats::from_destinations(&[]), Stats { total: 0, visited: 0, percent: 0 });
    }
}
