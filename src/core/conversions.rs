//! Conversions between marketstack's wire date strings and `chrono` types.

use chrono::{DateTime, FixedOffset, NaiveDate};

/// Format a calendar date the way the API expects it in `date_from`/`date_to`
/// and in `/eod/{date}` (`YYYY-MM-DD`).
#[must_use]
pub fn date_to_api(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date as sent by the API.
///
/// Bars carry `2024-01-15T00:00:00+0000`; RFC 3339 and a bare `YYYY-MM-DD`
/// (taken as midnight UTC) are accepted too.
#[must_use]
pub fn parse_api_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset())
}
