//! Localized month names rewritten to their English equivalents.
//!
//! Only names that differ from English and are not already understood by
//! the English month matcher need an entry. Input is expected lower-cased.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `(localized, english)` pairs, matched on word boundaries.
const MONTHS: &[(&str, &str)] = &[
    // Dutch
    ("januari", "january"),
    ("februari", "february"),
    ("maart", "march"),
    ("mrt", "mar"),
    ("mei", "may"),
    ("juni", "june"),
    ("juli", "july"),
    ("augustus", "august"),
    ("oktober", "october"),
    ("okt", "oct"),
    // German
    ("januar", "january"),
    ("februar", "february"),
    ("märz", "march"),
    ("mär", "mar"),
    ("mrz", "mar"),
    ("mai", "may"),
    ("dezember", "december"),
    ("dez", "dec"),
    // Spanish
    ("enero", "january"),
    ("ene", "jan"),
    ("abril", "april"),
    ("abr", "apr"),
    ("diciembre", "december"),
    ("dic", "dec"),
];

static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<&str> = MONTHS.iter().map(|(local, _)| *local).collect();
    Regex::new(&format!(r"\b(?:{})\b", alternatives.join("|"))).expect("month table is a valid regex")
});

/// Replaces every localized month name in `input` with its English form.
///
/// Returns the input unchanged (borrowed) when nothing matched.
pub fn substitute(input: &str) -> Cow<'_, str> {
    MONTH_RE.replace_all(input, |caps: &Captures<'_>| {
        let found = &caps[0];
        MONTHS
            .iter()
            .find(|(local, _)| *local == found)
            .map_or(found, |(_, english)| *english)
            .to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dutch_abbreviations() {
        assert_eq!(substitute("12 mrt 2024"), "12 mar 2024");
        assert_eq!(substitute("1 mei 2023 10:00"), "1 may 2023 10:00");
        assert_eq!(substitute("3 okt 2022"), "3 oct 2022");
    }

    #[test]
    fn test_full_names() {
        assert_eq!(substitute("5 maart 2024"), "5 march 2024");
        assert_eq!(substitute("17 juli 2021"), "17 july 2021");
        assert_eq!(substitute("1. märz 2020"), "1. march 2020");
    }

    #[test]
    fn test_word_boundaries() {
        // "meinung" and "okta" must survive untouched
        assert_eq!(substitute("meinung okta"), "meinung okta");
        assert!(matches!(substitute("jul 24, 2024"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_longer_alternatives_win() {
        // "januari" must not be cut at "januar"
        assert_eq!(substitute("2 januari 2024"), "2 january 2024");
        assert_eq!(substitute("2 januar 2024"), "2 january 2024");
    }
}
