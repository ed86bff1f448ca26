//! Date-of-birth formatting.
//!
//! Timestamps arrive either as epoch milliseconds or as ISO-8601 strings
//! and are rendered as `MM/DD/YYYY`. All three fields use the UTC calendar.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Iso(String),
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::Iso(String::new())
    }
}

impl Timestamp {
    /// Interpret the timestamp on the UTC calendar.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Millis(ms) => DateTime::from_timestamp_millis(*ms),
            Self::Iso(text) => parse_iso(text.trim()),
        }
    }
}

fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    // Offset-less forms are taken as UTC.
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a date as `MM/DD/YYYY`.
///
/// Month and day are zero-padded to two digits; the year is printed as-is,
/// so years before 1000 come out shorter than four digits.
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
}

/// Format a timestamp as `MM/DD/YYYY`, or an empty string if it cannot be read.
pub fn format_dob(timestamp: &Timestamp) -> String {
    match timestamp.to_utc() {
        Some(date) => format_date(&date),
        None => {
            log::debug!("Unreadable date of birth: {timestamp:?}");
            String::new()
        }
    }
}
