//! Property-based tests for ddpack.
//!
//! These tests generate random inputs to find edge cases.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use proptest::prelude::*;

use ddpack::category::{Category, FileFormat, Language};
use ddpack::inference::{coverage, infer_category};
use ddpack::timestamp::{normalize_timestamp, sort_key_empty_last, SortKey, EPOCH_RANGE};

/// Pool of synthetic known-file names, large enough for every generated category.
static NAMES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    (0..200)
        .map(|i| &*Box::leak(format!("file_{i:03}.json").into_boxed_str()))
        .collect()
});

fn category_with(total: usize) -> Category {
    Category::new("json_en", FileFormat::Json, Language::En, &NAMES[..total])
}

fn ceil_div(a: usize, b: usize) -> usize {
    a.div_ceil(b)
}

/// Whole-minute offsets between -12:00 and +14:00.
fn arb_offset() -> impl Strategy<Value = FixedOffset> {
    (-48i32..=56).prop_map(|quarters| FixedOffset::east_opt(quarters * 15 * 60).unwrap())
}

proptest! {
    /// Any input yields either the sentinel or an ISO timestamp, without panicking.
    #[test]
    fn normalizer_is_total(input in "\\PC*") {
        let out = normalize_timestamp(input.as_str());
        prop_assert!(out.is_empty() || DateTime::parse_from_rfc3339(&out).is_ok(), "bad output {out:?}");
    }

    /// Date-ish noise built from digits, separators and month names.
    #[test]
    fn normalizer_is_total_on_dateish_text(
        input in "[0-9a-z :/,.+-]{0,40}"
    ) {
        let out = normalize_timestamp(input.as_str());
        prop_assert!(out.is_empty() || matches!(sort_key_empty_last(&out), SortKey::Dated(_)));
    }

    #[test]
    fn epoch_seconds_round_trip(secs in EPOCH_RANGE) {
        let out = normalize_timestamp(secs.to_string().as_str());
        let parsed = DateTime::parse_from_rfc3339(&out).unwrap();
        prop_assert_eq!(parsed.timestamp(), secs);
        prop_assert_eq!(parsed.offset().local_minus_utc(), 0);

        // integers and text agree
        prop_assert_eq!(normalize_timestamp(secs), out);
    }

    #[test]
    fn iso_input_keeps_its_instant(secs in EPOCH_RANGE, offset in arb_offset()) {
        let dt = offset.timestamp_opt(secs, 0).unwrap();
        let input = dt.to_rfc3339();
        let out = normalize_timestamp(input.as_str());
        let parsed = DateTime::parse_from_rfc3339(&out).unwrap();
        prop_assert_eq!(parsed.with_timezone(&Utc), dt.with_timezone(&Utc));
    }

    /// ceil(5% of N) known files are enough; floor(5% of N) - 1 are not.
    #[test]
    fn inference_threshold(total in 1usize..=200) {
        let category = category_with(total);
        let candidates = std::slice::from_ref(&category);

        let enough = ceil_div(total * 5, 100);
        let inference = infer_category(&NAMES[..enough], candidates);
        prop_assert!(inference.is_confirmed(), "{enough}/{total} should match");

        if let Some(too_few) = (total * 5 / 100).checked_sub(1) {
            let inference = infer_category(&NAMES[..too_few], candidates);
            prop_assert!(!inference.is_confirmed(), "{too_few}/{total} should not match");
        }
    }

    /// Adding a known file never lowers coverage; unrelated files never change it.
    #[test]
    fn coverage_is_monotonic(total in 1usize..=100, found in 0usize..100, extra in 0usize..20) {
        let found = found.min(total - 1);
        let category = category_with(total);

        let before = coverage(&NAMES[..found], &category).percent();
        let after = coverage(&NAMES[..=found], &category).percent();
        prop_assert!(after >= before);

        let mut with_noise: Vec<&str> = NAMES[..found].to_vec();
        with_noise.extend(NAMES[100..100 + extra].iter().copied());
        let noisy = coverage(&with_noise, &category).percent();
        prop_assert!((noisy - before).abs() < f64::EPSILON);
    }
}
