use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::Result;

/// Display layout for report dates, e.g. "Tuesday 06 July 2021".
const DISPLAY_FORMAT: &str = "%A %d %B %Y";

/// Convert an ISO-8601 timestamp into a human-readable display date.
///
/// A trailing `Z` is stripped rather than interpreted as UTC, and for
/// offset-aware input the date is rendered as written in that offset.
/// Accepts an offset-aware timestamp, a naive timestamp, or a plain date.
pub fn convert_date(iso_string: &str) -> Result<String> {
    let trimmed = iso_string.trim_end_matches('Z');

    if let Ok(aware) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(aware.format(DISPLAY_FORMAT).to_string());
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.format(DISPLAY_FORMAT).to_string());
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")?;
    Ok(date.format(DISPLAY_FORMAT).to_string())
}
