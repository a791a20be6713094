//! Lenient date / datetime input parsing.
//!
//! Forms post dates in whatever shape the browser produced: full RFC 3339,
//! `datetime-local` values without seconds or offset, or bare calendar dates.
//! Values without an offset are interpreted as UTC.
//!
//! [`DateTimeInput`] and [`DateInput`] keep the raw string next to the parsed
//! value so that an unparseable value survives deserialization and is
//! reported by the validation layer as a field error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Timestamp;

/// Naive datetime layouts accepted in addition to RFC 3339.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a datetime string into a UTC timestamp.
///
/// Bare dates resolve to midnight UTC.
pub fn parse_datetime(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a string into a calendar date.
///
/// Datetime inputs keep the calendar date as written, in their own offset,
/// so `2025-06-01T23:30:00-05:00` is June 1st, not June 2nd.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.date())
}

// ---------------------------------------------------------------------------
// Deserializable inputs
// ---------------------------------------------------------------------------

/// A datetime field as received on the wire.
///
/// The default is a blank value, which fails [`crate::validation::datetime`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateTimeInput {
    raw: String,
    parsed: Option<Timestamp>,
}

impl DateTimeInput {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_datetime(&raw);
        Self { raw, parsed }
    }

    /// The parsed value, `None` when blank or unparseable.
    pub fn value(&self) -> Option<Timestamp> {
        self.parsed
    }

    /// Whether the client sent an empty string (an explicit clear).
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

impl<'de> Deserialize<'de> for DateTimeInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Serializes as the raw input, so a rejected value is echoed back verbatim.
impl Serialize for DateTimeInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// A calendar-date field as received on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateInput {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl DateInput {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_date(&raw);
        Self { raw, parsed }
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.parsed
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl Serialize for DateInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
