use chrono::{DateTime, Utc};

/// Fixed-length buckets, tested largest to smallest.
///
/// Month and year are 30- and 365-day approximations, not calendar-aware.
/// That imprecision is part of the display contract and kept as-is.
const BUCKETS: &[(&str, i64)] = &[
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Render an RFC 3339 timestamp relative to the current wall clock.
pub fn format_relative_time(iso: &str) -> String {
    format_relative_time_at(iso, Utc::now())
}

/// Render an RFC 3339 timestamp relative to a supplied `now`.
///
/// The first bucket whose integer quotient reaches 1 wins, pluralized above
/// one; anything under a second (including unparseable input and timestamps
/// in the future) is `"just now"`.
pub fn format_relative_time_at(iso: &str, now: DateTime<Utc>) -> String {
    let Ok(published) = DateTime::parse_from_rfc3339(iso) else {
        return "just now".to_string();
    };
    let elapsed = (now - published.with_timezone(&Utc)).num_seconds();

    for &(unit, secs) in BUCKETS {
        let n = elapsed / secs;
        if n >= 1 {
            let plural = if n > 1 { "s" } else { "" };
            return format!("{n} {unit}{plural} ago");
        }
    }
    "just now".to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/format/relative.rs"]
mod tests;
