//! Platform exclusion rules.
//!
//! Facebook and Instagram exports share many generic file names, so a
//! coverage match alone can pick the wrong platform. After a category has
//! been inferred, the validator runs the platform's [`ExclusionRule`]s over
//! the matched category, the archive's name and its entry paths; any rule
//! that fires turns the match into "not recognized".

use std::fmt;

use crate::category::{Category, FileFormat};
use crate::platform::Platform;

/// What an exclusion rule gets to look at.
#[derive(Debug, Clone, Copy)]
pub struct ArchiveFacts<'a> {
    /// Category picked by inference
    pub category: &'a Category,
    /// File name of the uploaded archive itself (may be empty)
    pub archive_name: &'a str,
    /// Relevant in-archive paths, as scanned
    pub paths: &'a [String],
}

impl<'a> ArchiveFacts<'a> {
    /// Bundles the inferred category with the archive name and scanned paths.
    pub fn new(category: &'a Category, archive_name: &'a str, paths: &'a [String]) -> Self {
        Self {
            category,
            archive_name,
            paths,
        }
    }

    /// True if the archive name or any path contains `token`, ignoring case.
    pub fn mentions(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        std::iter::once(self.archive_name)
            .chain(self.paths.iter().map(String::as_str))
            .any(|text| text.to_lowercase().contains(&token))
    }
}

/// A post-inference check that can veto a platform match.
pub trait ExclusionRule: Send + Sync + fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns true if the archive must not be accepted.
    fn rejects(&self, facts: &ArchiveFacts<'_>) -> bool;
}

/// Rejects archives that name a competing platform but never their own.
///
/// # Example
///
/// ```rust
/// use ddpack::category::{Category, FileFormat, Language};
/// use ddpack::exclusion::{ArchiveFacts, CompetingPlatformRule, ExclusionRule};
/// use ddpack::platform::Platform;
///
/// let category = Category::new("json_en", FileFormat::Json, Language::En, &["comments.json"]);
/// let rule = CompetingPlatformRule::new(Platform::Facebook, Platform::Instagram);
/// let paths = vec!["your_activity/comments.json".to_string()];
///
/// assert!(rule.rejects(&ArchiveFacts::new(&category, "instagram-jdoe-2024.zip", &paths)));
/// assert!(!rule.rejects(&ArchiveFacts::new(&category, "facebook-jdoe-2024.zip", &paths)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompetingPlatformRule {
    own: Platform,
    rival: Platform,
}

impl CompetingPlatformRule {
    /// Rule for `own` that fires on archives mentioning only `rival`.
    pub const fn new(own: Platform, rival: Platform) -> Self {
        Self { own, rival }
    }
}

impl ExclusionRule for CompetingPlatformRule {
    fn name(&self) -> &'static str {
        "competing-platform"
    }

    fn rejects(&self, facts: &ArchiveFacts<'_>) -> bool {
        facts.mentions(self.rival.token()) && !facts.mentions(self.own.token())
    }
}

/// Rejects matches whose category has a format outside the accepted set.
///
/// Only the matched category is checked. Auxiliary files such as a CSV may
/// carry the whole match as long as the category they belong to is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedFormatsRule {
    accepted: &'static [FileFormat],
}

impl AcceptedFormatsRule {
    /// Rule accepting only categories whose format is in `accepted`.
    pub const fn new(accepted: &'static [FileFormat]) -> Self {
        Self { accepted }
    }
}

impl ExclusionRule for AcceptedFormatsRule {
    fn name(&self) -> &'static str {
        "accepted-formats"
    }

    fn rejects(&self, facts: &ArchiveFacts<'_>) -> bool {
        !self.accepted.contains(&facts.category.file_format)
    }
}

/// Returns the name of the first rule that rejects the archive.
pub fn first_rejection(rules: &[Box<dyn ExclusionRule>], facts: &ArchiveFacts<'_>) -> Option<&'static str> {
    rules.iter().find(|rule| rule.rejects(facts)).map(|rule| rule.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Language;

    static JSON_EN: Category = Category::new("json_en", FileFormat::Json, Language::En, &["comments.json"]);
    static CSV_EN: Category = Category::new("csv_en", FileFormat::Csv, Language::En, &["comments.csv"]);

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let p = paths(&["Instagram/likes/liked_posts.json"]);
        let facts = ArchiveFacts::new(&JSON_EN, "", &p);
        assert!(facts.mentions("instagram"));
        assert!(facts.mentions("INSTAGRAM"));
        assert!(!facts.mentions("facebook"));
    }

    #[test]
    fn test_rival_only_rejects() {
        let rule = CompetingPlatformRule::new(Platform::Facebook, Platform::Instagram);
        let p = paths(&["comments.json"]);
        assert!(rule.rejects(&ArchiveFacts::new(&JSON_EN, "instagram_export.zip", &p)));
    }

    #[test]
    fn test_both_tokens_accept() {
        let rule = CompetingPlatformRule::new(Platform::Facebook, Platform::Instagram);
        let p = paths(&["facebook/connections/instagram_followers.json"]);
        assert!(!rule.rejects(&ArchiveFacts::new(&JSON_EN, "export.zip", &p)));
    }

    #[test]
    fn test_neither_token_accepts() {
        let rule = CompetingPlatformRule::new(Platform::Instagram, Platform::Facebook);
        let p = paths(&["your_activity/likes/liked_posts.json"]);
        assert!(!rule.rejects(&ArchiveFacts::new(&JSON_EN, "export.zip", &p)));
    }

    #[test]
    fn test_first_rejection() {
        let rules: Vec<Box<dyn ExclusionRule>> = vec![Box::new(CompetingPlatformRule::new(
            Platform::Instagram,
            Platform::Facebook,
        ))];
        let p = paths(&["facebook_data/comments.json"]);
        assert_eq!(
            first_rejection(&rules, &ArchiveFacts::new(&JSON_EN, "", &p)),
            Some("competing-platform")
        );
        assert_eq!(first_rejection(&[], &ArchiveFacts::new(&JSON_EN, "", &p)), None);
    }

    #[test]
    fn test_accepted_formats_rule() {
        let rule = AcceptedFormatsRule::new(&[FileFormat::Json, FileFormat::Html]);
        let mixed = paths(&[
            "Takeout/YouTube and YouTube Music/comments/comments.csv",
            "Takeout/My Activity/Search/My Activity.json",
        ]);
        assert!(rule.rejects(&ArchiveFacts::new(&CSV_EN, "takeout.zip", &mixed)));
        assert!(!rule.rejects(&ArchiveFacts::new(&JSON_EN, "takeout.zip", &mixed)));
    }

    #[test]
    fn test_accepted_formats_allows_csv_only_paths() {
        let rule = AcceptedFormatsRule::new(&[FileFormat::Json, FileFormat::Html]);
        let csv_only = paths(&["Takeout/YouTube and YouTube Music/comments/comments.csv"]);
        assert!(!rule.rejects(&ArchiveFacts::new(&JSON_EN, "takeout.zip", &csv_only)));
        assert!(rule.rejects(&ArchiveFacts::new(&CSV_EN, "takeout.zip", &csv_only)));
    }
}
