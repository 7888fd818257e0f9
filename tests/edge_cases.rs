//! Edge case tests for ddpack
//!
//! These tests cover the timestamp formats seen in real exports and the
//! boundary conditions of the helpers extractors build on.

use ddpack::prelude::*;
use ddpack::timestamp::{epoch_to_iso, is_epoch, is_iso8601};
use serde_json::json;

// =========================================================================
// Timestamp scenarios
// =========================================================================

#[test]
fn test_epoch_string() {
    assert_eq!(normalize_timestamp("1721418966"), "2024-07-19T19:56:06+00:00");
}

#[test]
fn test_us_display_format() {
    assert_eq!(normalize_timestamp("Jul 24, 2024, 11:54 PM"), "2024-07-24T23:54:00+00:00");
}

#[test]
fn test_free_text_is_sentinel() {
    assert_eq!(normalize_timestamp("not a date at all"), "");
}

#[test]
fn test_empty_and_missing() {
    assert_eq!(normalize_timestamp(""), "");
    assert_eq!(normalize_timestamp("   "), "");
    assert_eq!(normalize_timestamp(None::<i64>), "");
    assert_eq!(normalize_timestamp(&json!(null)), "");
    assert_eq!(normalize_timestamp(&json!({"timestamp": 1})), "");
}

#[test]
fn test_json_numbers() {
    assert_eq!(normalize_timestamp(&json!(1721418966)), "2024-07-19T19:56:06+00:00");
    assert_eq!(normalize_timestamp(&json!(1721418966.75)), "2024-07-19T19:56:06+00:00");
    assert_eq!(normalize_timestamp(&json!("1721418966")), "2024-07-19T19:56:06+00:00");
}

#[test]
fn test_iso_with_offset_is_kept() {
    assert_eq!(normalize_timestamp("2024-07-24T10:15:30+02:00"), "2024-07-24T10:15:30+02:00");
    assert_eq!(normalize_timestamp("2024-07-24T10:15:30Z"), "2024-07-24T10:15:30+00:00");
    assert_eq!(normalize_timestamp("2024-07-24T10:15:30.250Z"), "2024-07-24T10:15:30.250+00:00");
}

#[test]
fn test_explicit_formats() {
    assert_eq!(normalize_timestamp("2024-07-24 08:30:00"), "2024-07-24T08:30:00+00:00");
    assert_eq!(normalize_timestamp("2024/07/24"), "2024-07-24T00:00:00+00:00");
    assert_eq!(normalize_timestamp("24 Jul 2024"), "2024-07-24T00:00:00+00:00");
    assert_eq!(normalize_timestamp("July 24, 2024"), "2024-07-24T00:00:00+00:00");
}

#[test]
fn test_dutch_month_names() {
    assert_eq!(normalize_timestamp("12 mrt 2024"), "2024-03-12T00:00:00+00:00");
    assert_eq!(normalize_timestamp("3 mei 2024 14:05"), "2024-05-03T14:05:00+00:00");
    assert_eq!(normalize_timestamp("1 okt 2023"), "2023-10-01T00:00:00+00:00");
}

#[test]
fn test_localized_months_can_be_disabled() {
    let normalizer = TimestampNormalizer::with_config(TimestampConfig::new().with_localized_months(false));
    assert_eq!(normalizer.normalize("12 mrt 2024"), "");
    assert_eq!(normalizer.normalize("12 mar 2024"), "2024-03-12T00:00:00+00:00");
}

#[test]
fn test_day_order_is_configurable() {
    assert_eq!(normalize_timestamp("03/04/2024"), "2024-03-04T00:00:00+00:00");

    let day_first = TimestampNormalizer::with_config(TimestampConfig::new().with_day_order(DayOrder::DayFirst));
    assert_eq!(day_first.normalize("03/04/2024"), "2024-04-03T00:00:00+00:00");

    // unambiguous dates ignore the setting
    assert_eq!(day_first.normalize("04/25/2024"), "2024-04-25T00:00:00+00:00");
}

#[test]
fn test_epoch_unit_is_explicit() {
    let millis = TimestampNormalizer::with_config(TimestampConfig::new().with_epoch_unit(EpochUnit::Milliseconds));
    assert_eq!(millis.normalize(1_721_418_966_123_i64), "2024-07-19T19:56:06.123+00:00");

    // no magnitude guessing: milliseconds read as seconds are out of range
    assert_eq!(normalize_timestamp("1721418966123"), "");
}

#[test]
fn test_strict_epoch_helpers() {
    assert_eq!(epoch_to_iso(1721418966, EpochUnit::Seconds), "2024-07-19T19:56:06+00:00");
    assert_eq!(epoch_to_iso("July 2024", EpochUnit::Seconds), "");

    assert!(is_epoch([1721418966_i64, 1721418967, 0], 2));
    assert!(!is_epoch([0_i64, 1721418967], 2));
    assert!(is_iso8601(["2024-07-24T10:00:00Z", "2024-07-25T10:00:00+02:00"], 2, false));
    assert!(is_iso8601(["2024-07-24"], 1, true));
    assert!(!is_iso8601(["24-07-2024"], 1, true));
}

// =========================================================================
// Rows and redaction
// =========================================================================

#[test]
fn test_rows_sorted_with_mixed_inputs() {
    let mut rows = vec![
        Row::new("a", "Like").with_timestamp("not a date at all"),
        Row::new("b", "Like").with_timestamp(1_600_000_000_i64),
        Row::new("c", "Like").with_timestamp("Jul 24, 2024, 11:54 PM"),
        Row::new("d", "Like").with_timestamp("2022-01-01T00:00:00+05:00"),
    ];
    sort_rows_newest_first(&mut rows);

    let order: Vec<_> = rows.iter().map(|r| r.data_type.as_str()).collect();
    assert_eq!(order, ["c", "d", "b", "a"]);
    assert!(rows[3].is_undated());
}

#[test]
fn test_redaction_pipeline() {
    let text = "  Comment by janedoe\n(jane.doe@example.com)  ";
    let cleaned = squish(&replace_username(&replace_email(text), "janedoe"));
    assert_eq!(cleaned, "Comment by this_is_the_username (this_is_an_email)");
}

// =========================================================================
// JSON tree helpers
// =========================================================================

#[test]
fn test_bfs_on_export_like_document() {
    let doc = json!({
        "comments_v2": [{
            "timestamp": 1721418966,
            "data": [{"comment": {"comment": "Nice!", "author": "Jane"}}],
            "title": "Jane commented on a post."
        }]
    });
    let none = json!("");

    assert_eq!(find_first_bfs(&doc, "timestamp", &none), &json!(1721418966));
    assert_eq!(find_first_bfs(&doc, "author", &none), &json!("Jane"));
    assert_eq!(find_first_bfs(&doc, "uri", &none), &none);
}

#[test]
fn test_denest_then_least_nested() {
    let doc = json!({
        "string_map_data": {"Search": {"value": "rust"}, "Time": {"timestamp": 1721418966}},
        "media": [{"title": "deep"}],
        "title": "shallow"
    });
    let flat = denest(&doc);

    assert_eq!(find_least_nested(&flat, "title"), "shallow");
    assert_eq!(find_least_nested(&flat, "Search"), "rust");
    assert_eq!(find_least_nested(&flat, "timestamp"), "1721418966");
    assert_eq!(find_least_nested(&flat, "missing"), "");
}
