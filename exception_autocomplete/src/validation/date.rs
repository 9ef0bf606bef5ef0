//! Date string parsing for date-typed parameters
//!
//! Accepted forms:
//! - RFC 3339 / ISO-8601 with offset or `Z` (`1994-11-05T08:15:30-05:00`)
//! - ISO-8601 with a compact offset (`1994-11-05T08:15:30-0500`)
//! - ISO-8601 local date-time, with or without seconds and fraction (read as UTC)
//! - calendar date `YYYY-MM-DD` (midnight UTC)
//! - RFC 2822 (`Sat, 05 Nov 1994 08:15:30 -0500`)
//!
//! Bare integers are never dates here, even though they look like epoch
//! seconds or milliseconds. Leading or trailing whitespace is rejected.

use crate::config::compile_time::validation::MAX_PARAM_LENGTH;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const LOCAL_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string into an offset-aware instant
pub fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    if value.is_empty() || value.len() > MAX_PARAM_LENGTH || looks_like_epoch(value) {
        return None;
    }

    if value.trim() != value {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed);
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive).into());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).into());
    }

    DateTime::parse_from_rfc2822(value).ok()
}

pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

fn looks_like_epoch(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
