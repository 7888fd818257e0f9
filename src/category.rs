//! DDP categories and the per-platform category registry.
//!
//! A [`Category`] is a recognizable export shape: one file format in one
//! language, identified by the set of file names such an export contains.
//! Categories are `'static` data declared in [`crate::platforms`]; a
//! [`CategoryRegistry`] is an immutable view over one platform's table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// File format of a data download package variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Json,
    Html,
    Csv,
    Txt,
}

impl FileFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Html => "html",
            FileFormat::Csv => "csv",
            FileFormat::Txt => "txt",
        }
    }

    /// Maps a file extension to a format, ignoring ASCII case.
    ///
    /// ```rust
    /// use ddpack::category::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_extension("JSON"), Some(FileFormat::Json));
    /// assert_eq!(FileFormat::from_extension("htm"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        [
            FileFormat::Json,
            FileFormat::Html,
            FileFormat::Csv,
            FileFormat::Txt,
        ]
        .into_iter()
        .find(|format| ext.eq_ignore_ascii_case(format.extension()))
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Json => write!(f, "JSON"),
            FileFormat::Html => write!(f, "HTML"),
            FileFormat::Csv => write!(f, "CSV"),
            FileFormat::Txt => write!(f, "TXT"),
        }
    }
}

/// Export language (localization variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Nl,
    Es,
    De,
    Ar,
    Tr,
    Zh,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
            Language::Es => "es",
            Language::De => "de",
            Language::Ar => "ar",
            Language::Tr => "tr",
            Language::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::En => "English",
            Language::Nl => "Dutch",
            Language::Es => "Spanish",
            Language::De => "German",
            Language::Ar => "Arabic",
            Language::Tr => "Turkish",
            Language::Zh => "Chinese",
        };
        f.write_str(name)
    }
}

/// How a category's known file names are compared with archive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatch {
    /// Byte-for-byte comparison.
    Exact,
    /// Unicode lower-case comparison on both sides.
    #[default]
    CaseInsensitive,
}

impl NameMatch {
    /// Folds a file name into its comparison key under this rule.
    pub fn key(&self, name: &str) -> String {
        match self {
            NameMatch::Exact => name.to_string(),
            NameMatch::CaseInsensitive => name.to_lowercase(),
        }
    }
}

/// A recognizable export shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Identifier, unique within a platform (e.g. `json_en`)
    pub id: &'static str,

    /// Format of the export's data files
    pub file_format: FileFormat,

    /// Localization of the export
    pub language: Language,

    /// File names expected in a genuine export of this shape
    pub known_files: &'static [&'static str],

    /// Comparison rule for `known_files`
    pub name_match: NameMatch,
}

impl Category {
    /// Declares a case-insensitive category.
    pub const fn new(
        id: &'static str,
        file_format: FileFormat,
        language: Language,
        known_files: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            file_format,
            language,
            known_files,
            name_match: NameMatch::CaseInsensitive,
        }
    }

    /// Switches this category to exact (case-sensitive) name matching.
    #[must_use]
    pub const fn exact(mut self) -> Self {
        self.name_match = NameMatch::Exact;
        self
    }

    /// Number of distinct known files.
    pub fn known_count(&self) -> usize {
        self.known_files.len()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.id, self.language, self.file_format)
    }
}

/// Immutable lookup over one platform's categories.
///
/// # Example
///
/// ```rust
/// use ddpack::category::{Category, CategoryRegistry, FileFormat, Language};
///
/// static CATEGORIES: &[Category] = &[
///     Category::new("json_en", FileFormat::Json, Language::En, &["comments.json"]),
/// ];
///
/// let registry = CategoryRegistry::new(CATEGORIES);
/// assert_eq!(registry.lookup("json_en").unwrap().file_format, FileFormat::Json);
/// assert!(registry.lookup("html_en").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CategoryRegistry {
    categories: &'static [Category],
}

impl CategoryRegistry {
    /// Wraps a static category table.
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// Finds a category by id.
    pub fn lookup(&self, id: &str) -> Option<&'static Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Iterates over all categories in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &'static Category> {
        self.categories.iter()
    }

    /// The underlying table, in declaration order.
    pub fn as_slice(&self) -> &'static [Category] {
        self.categories
    }

    /// Number of categories in the table.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// True if the platform has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[Category] = &[
        Category::new("json_en", FileFormat::Json, Language::En, &["a.json", "b.json"]),
        Category::new("html_nl", FileFormat::Html, Language::Nl, &["a.html"]).exact(),
    ];

    #[test]
    fn test_lookup_and_all() {
        let registry = CategoryRegistry::new(TABLE);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("html_nl").unwrap().language, Language::Nl);
        assert!(registry.lookup("txt_en").is_none());

        let ids: Vec<_> = registry.all().map(|c| c.id).collect();
        assert_eq!(ids, vec!["json_en", "html_nl"]);
    }

    #[test]
    fn test_exact_builder() {
        assert_eq!(TABLE[0].name_match, NameMatch::CaseInsensitive);
        assert_eq!(TABLE[1].name_match, NameMatch::Exact);
    }

    #[test]
    fn test_name_match_key() {
        assert_eq!(NameMatch::Exact.key("My Activity.json"), "My Activity.json");
        assert_eq!(
            NameMatch::CaseInsensitive.key("My Activity.json"),
            "my activity.json"
        );
    }

    #[test]
    fn test_file_format_extension() {
        assert_eq!(FileFormat::from_extension("Html"), Some(FileFormat::Html));
        assert_eq!(FileFormat::from_extension("txt"), Some(FileFormat::Txt));
        assert_eq!(FileFormat::from_extension("png"), None);
        assert_eq!(FileFormat::Csv.extension(), "csv");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TABLE[0].to_string(), "json_en (English JSON)");
    }
}
