use super::*;
use chrono::{Duration, TimeZone};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
}

fn ago(d: Duration) -> String {
    (now() - d).to_rfc3339()
}

#[test]
fn within_a_day_is_today() {
    assert_eq!(time_ago(Some(&ago(Duration::hours(3))), now()), "Today");
}

#[test]
fn between_one_and_two_days_is_yesterday() {
    assert_eq!(time_ago(Some(&ago(Duration::hours(24))), now()), "Yesterday");
    assert_eq!(time_ago(Some(&ago(Duration::hours(47))), now()), "Yesterday");
}

#[test]
fn within_a_week_counts_days() {
    assert_eq!(time_ago(Some(&ago(Duration::days(2))), now()), "2 days ago");
    assert_eq!(
        time_ago(Some(&ago(Duration::days(6) + Duration::hours(23))), now()),
        "6 days ago"
    );
}

#[test]
fn a_week_or_more_is_absolute_date() {
    assert_eq!(time_ago(Some(&ago(Duration::days(7))), now()), "3/13/2025");
    assert_eq!(
        time_ago(Some("2025-01-15T10:00:00Z"), now()),
        "1/15/2025"
    );
}

#[test]
fn future_timestamp_is_today() {
    assert_eq!(time_ago(Some(&ago(Duration::hours(-5))), now()), "Today");
}

#[test]
fn missing_or_garbage_is_empty() {
    assert_eq!(time_ago(None, now()), "");
    assert_eq!(time_ago(Some("yesterday-ish"), now()), "");
}

#[test]
fn parses_bare_dates() {
    let ts = parse_timestamp("2025-03-18").unwrap();
    assert_eq!(time_ago(Some("2025-03-18"), now()), "2 days ago");
    assert_eq!(format_date(ts), "3/18/2025");
}

#[test]
fn formats_detail_timestamp() {
    assert_eq!(
        format_timestamp("2025-06-01T15:04:00Z"),
        "6/1/2025, 3:04 PM UTC"
    );
    assert_eq!(format_timestamp("n/a"), "n/a");
}
