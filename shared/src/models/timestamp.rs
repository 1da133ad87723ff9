//! Serde helpers for creation timestamps
//!
//! Stored documents carry either RFC 3339 timestamps or the browser locale
//! form written by older clients (`"01/03/2025, 10:00:00 AM"`). Both are
//! accepted; RFC 3339 is always written back. A timestamp in no known form
//! decodes as absent, so one odd record never rejects a whole document.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Day-first (es-CO) forms are tried before month-first (en-US) ones
const LEGACY_FORMATS: [&str; 4] = [
    "%d/%m/%Y, %I:%M:%S %p",
    "%d/%m/%Y, %H:%M:%S",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %H:%M:%S",
];

/// Parse a timestamp in RFC 3339 or the legacy locale form
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    // es-CO locales render the meridiem as "a. m." / "p. m.", usually with
    // no-break spaces (U+00A0, U+202F)
    let normalized = raw
        .replace(['\u{a0}', '\u{202f}'], " ")
        .replace("a. m.", "AM")
        .replace("p. m.", "PM");

    LEGACY_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
        .map(|naive| naive.and_utc())
}

/// `Option<DateTime<Utc>>` field codec
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_some(&ts.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => Ok(parse_timestamp(&s)),
        }
    }
}
