//! Property-based tests for birthday formatting
//!
//! Tests invariants:
//! - Output is always `MM/DD/YYYY` for four-digit years
//! - Month and day round-trip through the formatted string
//! - Epoch millis and RFC 3339 text for the same instant agree

use chrono::{DateTime, Datelike, SecondsFormat};
use proptest::prelude::*;

use crate::core::directory::dob::format_date;
use crate::core::directory::{format_dob, Timestamp};

// 1900-01-01 .. 2099-12-31, in milliseconds
const MIN_MS: i64 = -2_208_988_800_000;
const MAX_MS: i64 = 4_102_444_799_000;

proptest! {
    #[test]
    fn shape_is_mm_dd_yyyy(ms in MIN_MS..MAX_MS) {
        let text = format_dob(&Timestamp::Millis(ms));
        prop_assert_eq!(text.len(), 10);
        let bytes = text.as_bytes();
        prop_assert_eq!(bytes[2], b'/');
        prop_assert_eq!(bytes[5], b'/');
        prop_assert!(text
            .chars()
            .enumerate()
            .all(|(i, c)| i == 2 || i == 5 || c.is_ascii_digit()));
    }

    #[test]
    fn fields_match_utc_calendar(ms in MIN_MS..MAX_MS) {
        let date = DateTime::from_timestamp_millis(ms).unwrap();
        let text = format_date(&date);
        let parts: Vec<u32> = text.split('/').map(|p| p.parse().unwrap()).collect();
        prop_assert_eq!(parts[0], date.month());
        prop_assert_eq!(parts[1], date.day());
        prop_assert_eq!(parts[2] as i32, date.year());
    }

    #[test]
    fn millis_and_iso_agree(ms in MIN_MS..MAX_MS) {
        let iso = DateTime::from_timestamp_millis(ms)
            .unwrap()
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        prop_assert_eq!(
            format_dob(&Timestamp::Millis(ms)),
            format_dob(&Timestamp::Iso(iso))
        );
    }

    #[test]
    fn garbage_formats_as_empty(text in "[g-z]{1,12}") {
        prop_assert_eq!(format_dob(&Timestamp::Iso(text)), "");
    }
}
