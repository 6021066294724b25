//! Tag normalization helpers.
//!
//! # Invariants
//! - A stored tag is never empty and never carries surrounding whitespace.
//! - A stored tag is always lowercase.

use std::collections::BTreeSet;

/// Normalizes one tag value.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes and deduplicates tag values, dropping blank ones.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> BTreeSet<String> {
    tags.iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_tag, normalize_tags};

    #[test]
    fn normalize_tag_trims_and_lowercases() {
        assert_eq!(normalize_tag("  Java ").as_deref(), Some("java"));
        assert_eq!(normalize_tag("ТЕСТ").as_deref(), Some("тест"));
    }

    #[test]
    fn normalize_tag_rejects_blank_values() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag(" \t\n"), None);
    }

    #[test]
    fn normalize_tags_deduplicates_case_variants() {
        let normalized = normalize_tags(&["Work", "WORK", "", "home"]);
        assert_eq!(
            normalized.into_iter().collect::<Vec<_>>(),
            vec!["home".to_string(), "work".to_string()]
        );
    }
}
