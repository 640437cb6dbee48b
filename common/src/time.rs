//! Timestamp parsing and human-readable relative times.

use chrono::{DateTime, NaiveDate, Utc};

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const DAY_MS: i64 = 86_400_000;

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (taken as midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Relative publish time for a news card.
///
/// Whole elapsed days decide the wording: `Today`, `Yesterday`,
/// `N days ago` up to six days, then the absolute date. Timestamps in the
/// future read as `Today`; missing or unparseable input yields an empty string.
pub fn time_ago(published: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(ts) = published.and_then(parse_timestamp) else {
        return String::new();
    };
    let days = (now - ts).num_milliseconds().div_euclid(DAY_MS);
    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => format_date(ts),
    }
}

/// `M/D/YYYY`, the short date shown for older articles.
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}

/// Full timestamp for detail views; falls back to the raw text if unparseable.
pub fn format_timestamp(value: &str) -> String {
    match parse_timestamp(value) {
        Some(ts) => ts.format("%-m/%-d/%Y, %-I:%M %p UTC").to_string(),
        None => value.to_string(),
    }
}
