//! Date normalisation for feed values.
//!
//! Everything downstream works on [`NaiveDate`]: the time of day is dropped
//! so two fields on the same calendar day always compare equal. A value that
//! cannot be read becomes `None` and is treated exactly like a missing field.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};

use crate::model::DateValue;

const TEXT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y", "%d.%m.%Y"];

/// Normalise any supported date representation to a calendar date.
///
/// Never panics; unreadable input yields `None`.
pub fn parse_safe_date(value: &DateValue) -> Option<NaiveDate> {
    match value {
        DateValue::Date(date) => Some(*date),
        DateValue::Instant(instant) => Some(local_day(instant)),
        DateValue::Timestamp {
            seconds,
            nanoseconds,
        } => DateTime::from_timestamp(*seconds, (*nanoseconds).min(999_999_999)).map(|dt| local_day(&dt)),
        DateValue::Millis(millis) => DateTime::from_timestamp_millis(*millis).map(|dt| local_day(&dt)),
        DateValue::Text(text) => parse_text(text),
        DateValue::Other(_) => None,
    }
}

/// [`parse_safe_date`] over an optional field.
pub fn parse_optional(value: Option<&DateValue>) -> Option<NaiveDate> {
    value.and_then(parse_safe_date)
}

fn parse_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for fmt in TEXT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return Some(date);
        }
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(local_day(&instant.with_timezone(&Utc)));
    }
    // Date-times without an offset are taken as local wall-clock time.
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.date());
        }
    }
    None
}

fn local_day(instant: &DateTime<Utc>) -> NaiveDate {
    let utc = instant.naive_utc();
    let offset = Local.offset_from_utc_datetime(&utc).local_minus_utc();
    utc.checked_add_signed(TimeDelta::seconds(i64::from(offset)))
        .unwrap_or(utc)
        .date()
}

/// `date` moved by `days`, saturating at the ends of the calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
