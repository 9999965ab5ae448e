//! Due-date parsing, normalization, and display formatting.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat};

/// Rendered in place of a due date that is missing or fails to parse.
pub const INVALID_DATE: &str = "invalid date";

/// Parses a stored or user-supplied due date.
///
/// Accepts RFC 3339 timestamps (the stored form) and bare `YYYY-MM-DD`
/// dates (seed data and form input). Impossible calendar dates such as
/// `2025-02-30` are rejected.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Converts a parsed date to the stored form: an RFC 3339 timestamp at
/// UTC midnight, e.g. `2025-05-25T00:00:00Z`.
#[must_use]
pub fn to_stored(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Formats a stored due date for display in day-first `DD/MM/YYYY` order.
///
/// Anything that does not parse renders as [`INVALID_DATE`] so one bad
/// record never breaks a whole listing.
#[must_use]
pub fn format_display_date(value: &str) -> String {
    parse_date(value).map_or_else(
        || INVALID_DATE.to_string(),
        |date| date.format("%d/%m/%Y").to_string(),
    )
}
