use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A date field as it arrives from the workspace feed.
///
/// Records written by different generations of the console store dates in
/// different shapes. Variants are tried in order; anything unrecognised ends
/// up in [`DateValue::Other`] so a single bad field never rejects the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// `YYYY-MM-DD`
    Date(NaiveDate),
    /// RFC 3339 instant, e.g. `2025-03-04T15:00:00Z`.
    Instant(DateTime<Utc>),
    /// Document-store timestamp object.
    Timestamp {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// Free text in one of the looser day-first or slash formats.
    Text(String),
    Other(serde_json::Value),
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Date(date)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(instant: DateTime<Utc>) -> Self {
        DateValue::Instant(instant)
    }
}
