//! Lenient date/time extraction from free text.
//!
//! Pulls a time of day (with optional meridiem and zone) and a calendar date
//! out of a string, ignoring surrounding words. A year and a month must be
//! present; a missing day defaults to the 1st and a missing time to
//! midnight. Input is expected trimmed and lower-cased.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc};
use regex::{Captures, Regex};

use crate::config::DayOrder;

static ISO_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9])t([0-9])").expect("valid regex"));

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([0-9]{1,2}):([0-9]{2})(?::([0-9]{2})(?:[.,]([0-9]{1,9}))?)?(?:\s*(am\b|pm\b|a\.m\.|p\.m\.))?",
    )
    .expect("valid regex")
});

static HOUR_MERIDIEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{1,2})\s*(am\b|pm\b|a\.m\.|p\.m\.)").expect("valid regex"));

static ZONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:(z|utc|gmt)\b)?\s*(?:([+-])([0-9]{2})(?::?([0-9]{2}))?\b)?").expect("valid regex")
});

static YMD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{4})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})\b").expect("valid regex")
});

static NUMERIC_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2})[-/.]([0-9]{1,2})[-/.]([0-9]{4}|[0-9]{2})\b").expect("valid regex")
});

static MONTH_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?(?:\b|$)",
    )
    .expect("valid regex")
});

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]+)(?:st|nd|rd|th)?\b").expect("valid regex"));

/// Time of day plus an optional explicit offset.
#[derive(Debug, Clone, Copy)]
struct Clock {
    time: NaiveTime,
    offset: Option<FixedOffset>,
}

/// Parses `input` leniently, returning `None` unless a date can be pinned down.
pub fn parse(input: &str, day_order: DayOrder) -> Option<DateTime<FixedOffset>> {
    if let Some(dt) = parse_iso(input) {
        return Some(dt);
    }

    let text = ISO_SEPARATOR_RE.replace_all(input, "$1 $2");
    let (clock, rest) = extract_clock(&text)?;
    let date = extract_date(&rest, day_order)?;

    let naive = NaiveDateTime::new(date, clock.map_or(NaiveTime::MIN, |c| c.time));
    let offset = clock.and_then(|c| c.offset).unwrap_or_else(|| Utc.fix());
    naive.and_local_timezone(offset).single()
}

/// Fast path for RFC 3339 / ISO 8601 date-times.
fn parse_iso(input: &str) -> Option<DateTime<FixedOffset>> {
    let upper = input.to_ascii_uppercase();
    if let Ok(dt) = DateTime::parse_from_rfc3339(&upper) {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(&upper, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Finds the time of day and returns it with the remaining text.
///
/// Returns `Some((None, text))` when there is no time at all and `None`
/// when a time is present but invalid, which makes the whole parse fail.
fn extract_clock(text: &str) -> Option<(Option<Clock>, String)> {
    // a signed "+05:30" is a bare offset, not a time of day
    let clock = CLOCK_RE
        .captures_iter(text)
        .find(|caps| caps.get(0).is_some_and(|m| !text[..m.start()].ends_with(['+', '-'])));
    if let Some(caps) = clock {
        let hour = number(&caps, 1)?;
        let minute = number(&caps, 2)?;
        let second = caps.get(3).map_or(Some(0), |m| m.as_str().parse().ok())?;
        let nanos = caps.get(4).map_or(0, |m| fraction_to_nanos(m.as_str()));
        let hour = apply_meridiem(hour, caps.get(5).map(|m| m.as_str()))?;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?;

        let whole = caps.get(0)?;
        let (offset, zone_len) = extract_zone(&text[whole.end()..])?;
        let rest = format!("{} {}", &text[..whole.start()], &text[whole.end() + zone_len..]);
        return Some((Some(Clock { time, offset }), rest));
    }

    if let Some(caps) = HOUR_MERIDIEM_RE.captures(text) {
        let hour = apply_meridiem(number(&caps, 1)?, caps.get(2).map(|m| m.as_str()))?;
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        let whole = caps.get(0)?;
        let rest = format!("{} {}", &text[..whole.start()], &text[whole.end()..]);
        return Some((Some(Clock { time, offset: None }), rest));
    }

    Some((None, text.to_string()))
}

/// Reads a zone designator directly after the time.
///
/// Returns the offset (if any) and the number of bytes consumed.
fn extract_zone(after: &str) -> Option<(Option<FixedOffset>, usize)> {
    let Some(caps) = ZONE_RE.captures(after) else {
        return Some((None, 0));
    };
    let consumed = caps.get(0).map_or(0, |m| m.end());

    if let Some(sign) = caps.get(2) {
        let hours: i32 = caps[3].parse().ok()?;
        let minutes: i32 = caps.get(4).map_or(Some(0), |m| m.as_str().parse().ok())?;
        if hours > 23 || minutes > 59 {
            return None;
        }
        let seconds = (hours * 3600 + minutes * 60) * if sign.as_str() == "-" { -1 } else { 1 };
        return Some((Some(FixedOffset::east_opt(seconds)?), consumed));
    }

    if caps.get(1).is_some() {
        return Some((Some(Utc.fix()), consumed));
    }

    Some((None, 0))
}

fn apply_meridiem(hour: u32, meridiem: Option<&str>) -> Option<u32> {
    match meridiem {
        None => Some(hour),
        Some(_) if !(1..=12).contains(&hour) => None,
        Some(m) if m.starts_with('a') => Some(hour % 12),
        Some(_) => Some(hour % 12 + 12),
    }
}

fn fraction_to_nanos(digits: &str) -> u32 {
    format!("{digits:0<9}").parse().unwrap_or(0)
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Finds a calendar date in text with the time already removed.
fn extract_date(text: &str, day_order: DayOrder) -> Option<NaiveDate> {
    if let Some(caps) = YMD_RE.captures(text) {
        let year = caps[1].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, number(&caps, 2)?, number(&caps, 3)?);
    }

    if let Some(caps) = NUMERIC_DATE_RE.captures(text) {
        let first = number(&caps, 1)?;
        let second = number(&caps, 2)?;
        let year = expand_year(&caps[3])?;
        let (mut month, mut day) = match day_order {
            DayOrder::MonthFirst => (first, second),
            DayOrder::DayFirst => (second, first),
        };
        if month > 12 && day <= 12 {
            std::mem::swap(&mut month, &mut day);
        }
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let month_match = MONTH_NAME_RE.captures(text)?;
    let month = month_number(&month_match[1])?;
    let whole = month_match.get(0)?;
    let rest = format!("{} {}", &text[..whole.start()], &text[whole.end()..]);

    let numbers: Vec<&str> = NUMBER_RE.captures_iter(&rest).filter_map(|c| c.get(1)).map(|m| m.as_str()).collect();
    let year_index = numbers
        .iter()
        .position(|n| n.len() == 4)
        .or_else(|| (numbers.len() >= 2).then(|| numbers.len() - 1))?;
    let year = expand_year(numbers[year_index])?;
    let day = numbers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != year_index)
        .find_map(|(_, n)| n.parse::<u32>().ok().filter(|d| (1..=31).contains(d)))
        .unwrap_or(1);

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Four digits are taken literally; two digits pivot at 69 (69-99 → 1900s).
fn expand_year(digits: &str) -> Option<i32> {
    let value: i32 = digits.parse().ok()?;
    match digits.len() {
        4 => Some(value),
        2 if value >= 69 => Some(1900 + value),
        2 => Some(2000 + value),
        _ => None,
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}
