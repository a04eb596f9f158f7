//! Display helpers for server-owned timestamps.
//!
//! The server emits ISO-8601 local date-times without an offset
//! (`2024-01-15T10:30:00`, sometimes with fractional seconds). RFC 3339 values
//! are accepted too. Only the calendar date is shown.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown in place of a missing or unparseable creation date.
pub const UNKNOWN_DATE: &str = "unknown";

/// Parse a server timestamp down to its calendar date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format an optional server timestamp as `YYYY-MM-DD`.
#[must_use]
pub fn format_created(raw: Option<&str>) -> String {
    raw.and_then(parse_date).map_or_else(
        || UNKNOWN_DATE.to_string(),
        |date| date.format("%Y-%m-%d").to_string(),
    )
}
