//! DDP category inference.
//!
//! Compares the file names found in an archive with each candidate
//! category's known files. A category's coverage is the share of *its own*
//! known files present in the archive, so unrelated extra files never lower
//! a score. The best-covered category wins if at least
//! [`MIN_COVERAGE_PERCENT`] of its known files were found.
//!
//! Ties on coverage go to the category with more known files, then to the
//! earlier category in the candidate slice.

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, info};

use crate::category::{Category, NameMatch};

/// Minimum coverage, in percent, for a category to be accepted.
pub const MIN_COVERAGE_PERCENT: u64 = 5;

/// Coverage of one candidate category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coverage<'a> {
    pub category: &'a Category,
    /// Distinct known files present in the archive
    pub found: usize,
    /// Number of known files of the category
    pub total: usize,
}

impl Coverage<'_> {
    /// Coverage in percent (0.0 - 100.0). Zero for a category with no known files.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.found as f64 / self.total as f64 * 100.0
        }
    }

    /// Exact threshold check, free of floating point rounding.
    pub fn meets_threshold(&self) -> bool {
        self.total > 0 && self.found as u64 * 100 >= MIN_COVERAGE_PERCENT * self.total as u64
    }

    /// Orders by coverage ratio, then by known-file count.
    fn rank(&self, other: &Self) -> Ordering {
        let lhs = self.found as u128 * other.total.max(1) as u128;
        let rhs = other.found as u128 * self.total.max(1) as u128;
        lhs.cmp(&rhs).then(self.total.cmp(&other.total))
    }
}

/// Outcome of inferring a category from a file listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Inference<'a> {
    /// Best-covered category, if it met the threshold
    pub category: Option<&'a Category>,
    /// Coverage of every candidate, in candidate order
    pub scores: Vec<Coverage<'a>>,
}

impl<'a> Inference<'a> {
    /// True when a category was accepted.
    pub fn is_confirmed(&self) -> bool {
        self.category.is_some()
    }

    /// The highest-ranked score, whether or not it met the threshold.
    pub fn best(&self) -> Option<&Coverage<'a>> {
        best_of(&self.scores)
    }

    /// The `(matched category, match confirmed)` pair.
    pub fn into_pair(self) -> (Option<&'a Category>, bool) {
        let confirmed = self.is_confirmed();
        (self.category, confirmed)
    }
}

/// Folded file names, one set per comparison rule.
struct NameIndex {
    exact: HashSet<String>,
    folded: HashSet<String>,
}

impl NameIndex {
    fn new<S: AsRef<str>>(file_names: &[S]) -> Self {
        let exact: HashSet<String> = file_names.iter().map(|n| n.as_ref().to_string()).collect();
        let folded = exact
            .iter()
            .map(|n| NameMatch::CaseInsensitive.key(n))
            .collect();
        Self { exact, folded }
    }

    fn contains(&self, name: &str, rule: NameMatch) -> bool {
        match rule {
            NameMatch::Exact => self.exact.contains(name),
            NameMatch::CaseInsensitive => self.folded.contains(&rule.key(name)),
        }
    }
}

/// Computes the coverage of a single category.
pub fn coverage<'a, S: AsRef<str>>(file_names: &[S], category: &'a Category) -> Coverage<'a> {
    score(&NameIndex::new(file_names), category)
}

fn score<'a>(index: &NameIndex, category: &'a Category) -> Coverage<'a> {
    let known: HashSet<String> = category
        .known_files
        .iter()
        .map(|name| category.name_match.key(name))
        .collect();
    let found = known
        .iter()
        .filter(|name| index.contains(name, category.name_match))
        .count();

    Coverage {
        category,
        found,
        total: known.len(),
    }
}

fn best_of<'s, 'a>(scores: &'s [Coverage<'a>]) -> Option<&'s Coverage<'a>> {
    // Keeps the first of equally ranked scores.
    scores.iter().reduce(|best, candidate| {
        if candidate.rank(best) == Ordering::Greater {
            candidate
        } else {
            best
        }
    })
}

/// Infers which candidate category a file listing belongs to.
///
/// `file_names` are bare file names (final path component), already filtered
/// to the platform's relevant extensions.
///
/// # Example
///
/// ```rust
/// use ddpack::category::{Category, FileFormat, Language};
/// use ddpack::inference::infer_category;
///
/// static CANDIDATES: &[Category] = &[
///     Category::new("json_en", FileFormat::Json, Language::En, &["comments.json", "likes.json"]),
/// ];
///
/// let inference = infer_category(&["comments.json", "unrelated.json"], CANDIDATES);
/// assert_eq!(inference.category.map(|c| c.id), Some("json_en"));
/// ```
pub fn infer_category<'a, S: AsRef<str>>(file_names: &[S], candidates: &'a [Category]) -> Inference<'a> {
    let index = NameIndex::new(file_names);
    let scores: Vec<Coverage<'a>> = candidates.iter().map(|c| score(&index, c)).collect();

    for s in &scores {
        debug!(
            category = s.category.id,
            found = s.found,
            total = s.total,
            "coverage {:.1}%",
            s.percent()
        );
    }

    let category = match best_of(&scores) {
        Some(best) if best.meets_threshold() => {
            info!("Detected DDP category: {}", best.category.id);
            Some(best.category)
        }
        _ => {
            info!("Not enough files matched when performing input validation");
            None
        }
    };

    Inference { category, scores }
}
