//! Epoch-millisecond conversions for the storage facade.
//!
//! The facade persists timestamps as epoch-millisecond values and date-only
//! fields as start-of-day epoch-millisecond values, both interpreted in the
//! local system time zone. Domain code works in `chrono` naive types; these
//! helpers sit at the storage boundary.
//!
//! DST edges are handled deterministically: an ambiguous local time maps to
//! its earlier instant, and a local time inside a spring-forward gap falls
//! back to a UTC interpretation.

use chrono::{LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono::{Local, Utc};

/// Converts a local naive timestamp to epoch milliseconds.
pub fn datetime_to_epoch_ms(dt: NaiveDateTime) -> i64 {
    match Local.from_local_datetime(&dt) {
        LocalResult::Single(t) => t.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => Utc.from_utc_datetime(&dt).timestamp_millis(),
    }
}

/// Converts epoch milliseconds back to a local naive timestamp.
///
/// Returns `None` for values outside chrono's representable range.
pub fn epoch_ms_to_datetime(ms: i64) -> Option<NaiveDateTime> {
    match Local.timestamp_millis_opt(ms) {
        LocalResult::Single(t) => Some(t.naive_local()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.naive_local()),
        LocalResult::None => None,
    }
}

/// Converts a date-only field to its start-of-day epoch-millisecond value.
pub fn date_to_epoch_ms(date: NaiveDate) -> i64 {
    datetime_to_epoch_ms(date.and_time(NaiveTime::MIN))
}

/// Reads a start-of-day epoch-millisecond value back as a date.
pub fn epoch_ms_to_date(ms: i64) -> Option<NaiveDate> {
    epoch_ms_to_datetime(ms).map(|dt| dt.date())
}
