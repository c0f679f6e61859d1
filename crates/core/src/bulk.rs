//! Parsing free-text input into multiple candidate place names.

/// Characters that split a raw input blob into separate names.
pub const NAME_SEPARATORS: [char; 3] = ['\n', ',', ';'];

/// Whether the raw input contains any bulk separator.
///
/// Callers use this to route input to single-add (with validation) or
/// bulk-add (without).
#[must_use]
pub fn has_separators(raw: &str) -> bool {
    raw.contains(NAME_SEPARATORS)
}

/// Splits a raw input blob into trimmed, non-empty candidate names.
///
/// Does not deduplicate; the store's bulk-add handles duplicates against
/// both itself and the existing list.
#[must_use]
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(NAME_SEPARATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_commas() {
        assert_eq!(split_names("Rome, Milan,Turin"), vec!["Rome", "Milan", "Turin"]);
    }

    #[test]
    fn test_split_on_mixed_separators() {
        assert_eq!(split_names("Rome;Milan\nTurin"), vec!["Rome", "Milan", "Turin"]);
    }

    #[test]
    fn test_empty_pieces_dropped() {
        assert_eq!(split_names(",,Rome, ,;\n"), vec!["Rome"]);
    }

    #[test]
    fn test_no_separators_yields_single_name() {
        assert_eq!(split_names("  Buenos Aires  "), vec!["Buenos Aires"]);
        assert!(!has_separators("Buenos Aires"));
    }

    #[test]
    fn test_has_separators() {
        assert!(has_separators("Rome,Milan"));
        assert!(has_separators("Rome\nMilan"));
        assert!(has_separators("Rome;Milan"));
    }

    #[test]
    fn test_duplicates_kept_verbatim() {
        assert_eq!(split_names("Rome,rome,Rome"), vec!["Rome", "rome", "Rome"]);
    }
}
