use chrono::Utc;

use super::*;

fn at(iso: &str) -> chrono::DateTime<Utc> {
    chrono::DateTime::parse_from_rfc3339(iso)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn ninety_seconds_is_one_minute() {
    let now = at("2026-08-07T12:01:30Z");
    assert_eq!(
        format_relative_time_at("2026-08-07T12:00:00Z", now),
        "1 minute ago"
    );
}

#[test]
fn same_instant_is_just_now() {
    let now = at("2026-08-07T12:00:00Z");
    assert_eq!(
        format_relative_time_at("2026-08-07T12:00:00Z", now),
        "just now"
    );
}

#[test]
fn two_days_pluralizes() {
    let now = at("2026-08-07T00:00:00Z");
    assert_eq!(
        format_relative_time_at("2026-08-05T00:00:00Z", now),
        "2 days ago"
    );
}

#[test]
fn buckets_run_largest_to_smallest() {
    let now = at("2026-08-07T00:00:00Z");
    assert_eq!(
        format_relative_time_at("2026-08-06T23:59:59Z", now),
        "1 second ago"
    );
    assert_eq!(
        format_relative_time_at("2026-08-06T22:00:00Z", now),
        "2 hours ago"
    );
    assert_eq!(
        format_relative_time_at("2026-07-30T00:00:00Z", now),
        "1 week ago"
    );
}

#[test]
fn month_and_year_use_fixed_length_approximations() {
    let now = at("2026-08-07T00:00:00Z");
    // 45 days: more than a fixed 30-day month, less than two.
    assert_eq!(
        format_relative_time_at("2026-06-23T00:00:00Z", now),
        "1 month ago"
    );
    // 400 days: past a fixed 365-day year.
    assert_eq!(
        format_relative_time_at("2025-07-03T00:00:00Z", now),
        "1 year ago"
    );
}

#[test]
fn future_timestamps_collapse_to_just_now() {
    let now = at("2026-08-07T00:00:00Z");
    assert_eq!(
        format_relative_time_at("2026-08-08T00:00:00Z", now),
        "just now"
    );
}

#[test]
fn offset_timestamps_are_normalized() {
    let now = at("2026-08-07T12:00:00Z");
    assert_eq!(
        format_relative_time_at("2026-08-07T13:00:00+02:00", now),
        "1 hour ago"
    );
}
