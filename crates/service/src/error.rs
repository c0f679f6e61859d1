//! Typed error enum for store operations.
//!
//! Every failure is returned as a value so the presentation layer can show
//! it; nothing in this layer panics. The place validator never contributes a
//! variant of its own: its failures are absorbed fail-open before they reach
//! the store.

use thiserror::Error;
use wanderlist_storage::StorageError;

/// Store-operation error. Each variant leaves the store state unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The name matches an existing record case-insensitively.
    #[error("\"{0}\" is already in your list")]
    DuplicateName(String),

    /// The place-search service found no match for the name.
    #[error("\"{0}\" could not be found")]
    PlaceNotFound(String),

    /// Import text is not parseable JSON, or its records do not decode.
    #[error("invalid JSON: {0}")]
    MalformedJson(String),

    /// Import document parses, but the top-level value is not an array.
    #[error("import document is not a JSON array")]
    NotAnArray,

    /// Import would collide with existing records; nothing was changed.
    #[error("cannot import, already in your list: {}", conflict_preview(.names, .truncated))]
    ImportConflict {
        /// First few colliding names (original casing).
        names: Vec<String>,
        /// Whether further colliding names were cut from the preview.
        truncated: bool,
    },

    /// The name is empty after trimming.
    #[error("destination name is empty")]
    EmptyName,

    /// The snapshot could not be written; the mutation was not applied.
    #[error("persistence: {0}")]
    Persistence(#[from] StorageError),
}

impl StoreError {
    /// Whether this error is a case-insensitive name collision.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateName(_))
    }

    /// Whether this error is an all-or-nothing import rejection.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ImportConflict { .. })
    }
}

fn conflict_preview(names: &[String], truncated: &bool) -> String {
    let mut preview = names.join(", ");
    if *truncated {
        preview.push_str(", ...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_display_truncation() {
        let err = StoreError::ImportConflict {
            names: vec!["Rome".to_owned(), "Milan".to_owned(), "Turin".to_owned()],
            truncated: true,
        };
        assert_eq!(err.to_string(), "cannot import, already in your list: Rome, Milan, Turin, ...");

        let err = StoreError::ImportConflict { names: vec!["Rome".to_owned()], truncated: false };
        assert_eq!(err.to_string(), "cannot import, already in your list: Rome");
    }

    #[test]
    fn test_classification_helpers() {
        assert!(StoreError::DuplicateName("Rome".to_owned()).is_duplicate());
        assert!(!StoreError::EmptyName.is_duplicate());
        assert!(StoreError::ImportConflict { names: vec![], truncated: false }.is_conflict());
    }
}
