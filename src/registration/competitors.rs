use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;\r\n]").expect("separator pattern is valid"));

/// Splits the free-text competitor field on commas, semicolons and newlines.
pub fn split_competitor_names(raw: &str) -> Vec<String> {
    SEPARATORS
        .split(raw)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn ensure_distinct(names: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::DuplicateCompetitorName(name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_all_separators() {
        let names = split_competitor_names("Ana, Borna;Cvita\nDino\r\nEma");
        assert_eq!(names, vec!["Ana", "Borna", "Cvita", "Dino", "Ema"]);
    }

    #[test]
    fn test_split_discards_empty_entries() {
        let names = split_competitor_names(" ,A,, ;B\n\n  \nC,D,");
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_inner_spaces_are_kept() {
        assert_eq!(split_competitor_names("Team Red, Team Blue"), vec!["Team Red", "Team Blue"]);
    }

    #[test]
    fn test_duplicates_detected_after_trim() {
        let names = split_competitor_names("A, B, C,  A ");
        assert_eq!(
            ensure_distinct(&names).unwrap_err(),
            ValidationError::DuplicateCompetitorName("A".to_string())
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let names = split_competitor_names("a,A,b,B");
        assert!(ensure_distinct(&names).is_ok());
    }
}
