//! Timestamp normalization to ISO 8601.
//!
//! Exports carry dates as epoch numbers, ISO strings, localized text
//! ("12 mrt 2024") or US-style display strings ("Jul 24, 2024, 11:54 PM").
//! [`TimestampNormalizer`] turns all of them into one representation:
//! an ISO 8601 date-time with an explicit offset, or `""` when nothing
//! sensible can be extracted. It never fails and never panics.
//!
//! The fallback chain, stopping at the first success:
//!
//! 1. empty input → `""`
//! 2. all digits (optionally one `.`) → Unix epoch in the configured unit
//! 3. localized month names rewritten to English
//! 4. lenient parse of date, time and zone out of surrounding text
//! 5. a fixed list of explicit formats
//!
//! Naive results are taken as UTC.
//!
//! # Example
//!
//! ```rust
//! use ddpack::timestamp::normalize_timestamp;
//!
//! assert_eq!(normalize_timestamp("1721418966"), "2024-07-19T19:56:06+00:00");
//! assert_eq!(normalize_timestamp("Jul 24, 2024, 11:54 PM"), "2024-07-24T23:54:00+00:00");
//! assert_eq!(normalize_timestamp("not a date at all"), "");
//! assert_eq!(normalize_timestamp(None::<&str>), "");
//! ```

mod formats;
mod fuzzy;
mod months;

use std::borrow::Cow;
use std::cmp::Reverse;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::config::{EpochUnit, TimestampConfig};

/// Inclusive epoch-second bounds accepted by [`is_epoch`] (2000-01-01 to 2040-01-01).
pub const EPOCH_RANGE: std::ops::RangeInclusive<i64> = 946_684_800..=2_208_988_800;

static ISO8601_FULL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(-?(?:[1-9][0-9]*)?[0-9]{4})-(1[0-2]|0[1-9])-(3[01]|0[1-9]|[12][0-9])T(2[0-3]|[01][0-9]):([0-5][0-9]):([0-5][0-9])(\.[0-9]+)?(Z|[+-](?:2[0-3]|[01][0-9]):[0-5][0-9])?$",
    )
    .expect("valid regex")
});

static ISO8601_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?(?:[1-9][0-9]*)?[0-9]{4})-(1[0-2]|0[1-9])-(3[01]|0[1-9]|[12][0-9])$").expect("valid regex")
});

/// A timestamp as it appears in an export, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawTimestamp<'a> {
    /// Integer value
    Int(i64),
    /// Floating-point value
    Float(f64),
    /// Text in any format
    Text(&'a str),
    /// Absent, null, or not a scalar
    Missing,
}

impl RawTimestamp<'_> {
    /// String form used by the fallback chain, before trimming.
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Missing => Cow::Borrowed(""),
        }
    }
}

impl From<i64> for RawTimestamp<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawTimestamp<'_> {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for RawTimestamp<'_> {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for RawTimestamp<'_> {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f64> for RawTimestamp<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a str> for RawTimestamp<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for RawTimestamp<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a Value> for RawTimestamp<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Missing),
            Value::String(s) => Self::Text(s),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Self::Missing,
        }
    }
}

impl<'a, T: Into<RawTimestamp<'a>>> From<Option<T>> for RawTimestamp<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Normalizes timestamps according to a [`TimestampConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampNormalizer {
    config: TimestampConfig,
}

impl TimestampNormalizer {
    /// Creates a normalizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer with custom settings.
    pub fn with_config(config: TimestampConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TimestampConfig {
        &self.config
    }

    /// Normalizes a value to ISO 8601, or `""` if it cannot be interpreted.
    pub fn normalize<'a>(&self, value: impl Into<RawTimestamp<'a>>) -> String {
        self.parse(value).map(format_iso).unwrap_or_default()
    }

    /// Like [`normalize`](Self::normalize), but returns the parsed value.
    pub fn parse<'a>(&self, value: impl Into<RawTimestamp<'a>>) -> Option<DateTime<FixedOffset>> {
        let raw = value.into();
        let text = raw.as_text();
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return None;
        }

        if looks_like_epoch(&text) {
            if let Some(dt) = parse_epoch_text(&text, self.config.epoch_unit) {
                return Some(dt.fixed_offset());
            }
        }

        let text = if self.config.localized_months {
            months::substitute(&text)
        } else {
            Cow::Borrowed(text.as_str())
        };

        let parsed = fuzzy::parse(&text, self.config.day_order)
            .or_else(|| formats::parse(&text))
            .filter(|dt| (1..=9999).contains(&dt.year()));
        if parsed.is_none() {
            debug!(value = %text, "unrecognized timestamp");
        }
        parsed
    }
}

/// Normalizes with the default configuration.
///
/// See the [module documentation](self) for the rules applied.
pub fn normalize_timestamp<'a>(value: impl Into<RawTimestamp<'a>>) -> String {
    TimestampNormalizer::new().normalize(value)
}

/// Strict epoch conversion: integers (or integer-valued text) only.
///
/// Floats are truncated toward zero. Returns `""` for anything else or for
/// values outside years 1 to 9999.
pub fn epoch_to_iso<'a>(value: impl Into<RawTimestamp<'a>>, unit: EpochUnit) -> String {
    epoch_value(value.into())
        .and_then(|n| from_epoch(n, unit))
        .map(|dt| format_iso(dt.fixed_offset()))
        .unwrap_or_default()
}

/// True if the first `check_minimum` values are epoch seconds between
/// 2000 and 2040. Text must hold a plain integer.
pub fn is_epoch<'a, I>(values: I, check_minimum: usize) -> bool
where
    I: IntoIterator,
    I::Item: Into<RawTimestamp<'a>>,
{
    values
        .into_iter()
        .take(check_minimum)
        .all(|value| epoch_value(value.into()).is_some_and(|n| EPOCH_RANGE.contains(&n)))
}

/// True if the first `check_minimum` values are ISO 8601 text.
///
/// With `date_only`, values must be plain `YYYY-MM-DD` dates; otherwise a
/// full `YYYY-MM-DDTHH:MM:SS[.f][zone]` date-time. Numbers never qualify.
pub fn is_iso8601<'a, I>(values: I, check_minimum: usize, date_only: bool) -> bool
where
    I: IntoIterator,
    I::Item: Into<RawTimestamp<'a>>,
{
    let re = if date_only { &*ISO8601_DATE_RE } else { &*ISO8601_FULL_RE };
    values.into_iter().take(check_minimum).all(|value| {
        let raw: RawTimestamp<'a> = value.into();
        matches!(raw, RawTimestamp::Text(s) if re.is_match(s))
    })
}

/// Ordering key that sorts newest first and undated values last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// A parseable timestamp
    Dated(Reverse<DateTime<Utc>>),
    /// Empty or unparseable
    Undated,
}

/// Builds a [`SortKey`] from a normalized timestamp.
///
/// ```rust
/// use ddpack::timestamp::sort_key_empty_last;
///
/// let mut dates = vec!["", "2024-01-01T00:00:00+00:00", "2024-06-01T00:00:00+00:00"];
/// dates.sort_by_key(|d| sort_key_empty_last(d));
/// assert_eq!(dates, ["2024-06-01T00:00:00+00:00", "2024-01-01T00:00:00+00:00", ""]);
/// ```
pub fn sort_key_empty_last(iso: &str) -> SortKey {
    parse_iso(iso).map_or(SortKey::Undated, |dt| SortKey::Dated(Reverse(dt)))
}

fn parse_iso(iso: &str) -> Option<DateTime<Utc>> {
    let iso = iso.trim();
    if iso.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Integer reading of a value; text must hold a plain integer.
fn epoch_value(raw: RawTimestamp<'_>) -> Option<i64> {
    match raw {
        RawTimestamp::Int(n) => Some(n),
        RawTimestamp::Float(f) => float_to_epoch(f),
        RawTimestamp::Text(s) => s.trim().parse().ok(),
        RawTimestamp::Missing => None,
    }
}

/// Digits only, or digits with exactly one decimal point.
fn looks_like_epoch(text: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn parse_epoch_text(text: &str, unit: EpochUnit) -> Option<DateTime<Utc>> {
    let whole = text.split('.').next().unwrap_or_default();
    let epoch = if whole.is_empty() { 0 } else { whole.parse::<i64>().ok()? };
    from_epoch(epoch, unit)
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_epoch(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up, so the upper bound is exclusive
    (value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64).then(|| value.trunc() as i64)
}

fn from_epoch(epoch: i64, unit: EpochUnit) -> Option<DateTime<Utc>> {
    let dt = match unit {
        EpochUnit::Seconds => DateTime::from_timestamp(epoch, 0)?,
        EpochUnit::Milliseconds => DateTime::from_timestamp_millis(epoch)?,
    };
    (1..=9999).contains(&dt.year()).then_some(dt)
}

fn format_iso(dt: DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
