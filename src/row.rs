//! Uniform row emitted by platform extractors.
//!
//! Every extractor, whatever the platform, flattens its records into
//! [`Row`]s so they can be merged into one table, sorted by date and shown
//! to the participant for review.
//!
//! # Serialization
//!
//! Field names follow the column headers of the review table
//! (`data_type`, `Action`, `title`, `URL`, `Date`, `details`).
//!
//! ```
//! use ddpack::row::Row;
//!
//! let row = Row::new("facebook_comment", "Comment")
//!     .with_title("Nice picture!")
//!     .with_timestamp(1_721_418_966_i64);
//!
//! let json = serde_json::to_string(&row)?;
//! assert!(json.contains(r#""Date":"2024-07-19T19:56:06+00:00""#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::timestamp::{normalize_timestamp, sort_key_empty_last, RawTimestamp};

/// One reviewable record extracted from an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Machine-readable record kind, e.g. `facebook_comment`.
    pub data_type: String,

    /// What the participant did.
    #[serde(rename = "Action")]
    pub action: String,

    /// Short human-readable description.
    #[serde(default)]
    pub title: String,

    /// Link related to the record, if any.
    #[serde(rename = "URL", default)]
    pub url: String,

    /// Normalized ISO 8601 timestamp, or `""` when unknown.
    #[serde(rename = "Date", default)]
    pub date: String,

    /// Free-form extra information, often a small JSON document.
    #[serde(default)]
    pub details: String,
}

impl Row {
    /// Creates a row with only a type and an action.
    pub fn new(data_type: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            action: action.into(),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the date from any raw timestamp, normalizing it.
    #[must_use]
    pub fn with_timestamp<'a>(mut self, raw: impl Into<RawTimestamp<'a>>) -> Self {
        self.date = normalize_timestamp(raw);
        self
    }

    /// Sets the details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    /// Returns true if the row has no usable date.
    pub fn is_undated(&self) -> bool {
        self.date.is_empty()
    }
}

/// Sorts rows newest first; rows without a parseable date go last.
///
/// The sort is stable, so undated rows keep their relative order.
pub fn sort_rows_newest_first(rows: &mut [Row]) {
    rows.sort_by_cached_key(|row| sort_key_empty_last(&row.date));
}
