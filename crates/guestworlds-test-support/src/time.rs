//! Timestamp shorthands so test tables stay readable.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Builds a UTC instant on the hour.
///
/// # Panics
///
/// Panics if the components do not form a valid timestamp.
#[must_use]
pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("test timestamp must be valid")
}

/// Builds a calendar date.
///
/// # Panics
///
/// Panics if the components do not form a valid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be valid")
}
