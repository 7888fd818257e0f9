//! Last-resort explicit formats, tried in order.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// `(pattern, has_time)`; date-only patterns resolve to midnight.
const FORMATS: &[(&str, bool)] = &[
    ("%b %d, %Y, %I:%M %p", true),
    ("%Y-%m-%d %H:%M:%S", true),
    ("%Y-%m-%d", false),
    ("%d/%m/%Y %H:%M:%S", true),
    ("%d/%m/%Y", false),
    ("%m/%d/%Y %H:%M:%S", true),
    ("%m/%d/%Y", false),
    ("%d-%m-%Y %H:%M:%S", true),
    ("%d-%m-%Y", false),
    ("%Y/%m/%d %H:%M:%S", true),
    ("%Y/%m/%d", false),
    ("%b %d %Y %H:%M:%S", true),
    ("%b %d %Y", false),
    ("%d %b %Y %H:%M:%S", true),
    ("%d %b %Y", false),
    ("%B %d, %Y %H:%M:%S", true),
    ("%B %d, %Y", false),
];

/// Tries each format in order; the first match is taken as UTC.
pub fn parse(input: &str) -> Option<DateTime<FixedOffset>> {
    FORMATS.iter().find_map(|(pattern, has_time)| {
        let naive = if *has_time {
            NaiveDateTime::parse_from_str(input, pattern).ok()?
        } else {
            NaiveDate::parse_from_str(input, pattern).ok()?.and_time(chrono::NaiveTime::MIN)
        };
        Some(naive.and_utc().fixed_offset())
    })
}
