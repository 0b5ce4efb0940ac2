//! Timestamp parsing and rendering for temporal attributes.
//!
//! Parsing is locale independent. Accepted forms, tried in order:
//! RFC 3339, `YYYY-MM-DD HH:MM[:SS[.f]]` (space or `T` separated) with or
//! without a numeric offset, and a bare `YYYY-MM-DD`. A timestamp without
//! an offset is taken to be UTC; a bare date is midnight.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, ParseError};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M %z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

pub fn parse(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let text = text.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Ok(time);
    }
    for format in OFFSET_FORMATS {
        if let Ok(time) = DateTime::parse_from_str(text, format) {
            return Ok(time);
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(time.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}

/// Canonical text form; always accepted by [`parse`].
pub fn render(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339()
}
