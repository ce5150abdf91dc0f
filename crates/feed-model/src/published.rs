/// Publication timestamps.
///
/// Feed backends hand timestamps over as strings in whatever shape the upstream
/// feed used: RFC 3339 with an offset, naive ISO-8601 (the backend's own
/// serializer drops the offset), bare dates, or RSS `pubDate` RFC 2822 strings.
/// `parse_published` accepts all of these and normalizes to UTC. Naive forms are
/// read as UTC.
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// `%#z` takes `+08:00`, `+0800` and `+08`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Parse a publication timestamp string into a UTC instant.
pub fn parse_published(input: &str) -> Result<DateTime<Utc>, ModelError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // A `Z` suffix on forms RFC 3339 rejects, e.g. without seconds.
    let (body, zulu) = match s.strip_suffix(|c| c == 'Z' || c == 'z') {
        Some(body) => (body, true),
        None => (s, false),
    };

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(body, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if !zulu {
        for fmt in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
                return Ok(dt.with_timezone(&Utc));
            }
        }

        if let Some(midnight) = parse_partial_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)) {
            return Ok(midnight.and_utc());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    Err(ModelError::InvalidPublished {
        input: input.to_string(),
    })
}

/// `YYYY-MM-DD`, `YYYY-MM` (first of the month) or `YYYY` (the first of January).
pub(crate) fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    let bytes = s.as_bytes();
    if bytes.len() == 7 && bytes[4] == b'-' {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok();
    }
    if bytes.len() == 4 && bytes.iter().all(u8::is_ascii_digit) {
        return NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1);
    }
    None
}

/// A parsed publication timestamp, or the sentinel for input that did not parse.
///
/// `Invalid` displays as `Invalid Date` and serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Published {
    At(DateTime<Utc>),
    Invalid,
}

impl Published {
    /// Lenient parse: never fails, yields `Invalid` when `parse_published` would error.
    pub fn parse(input: &str) -> Self {
        parse_published(input).map_or(Published::Invalid, Published::At)
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Published::At(dt) => Some(*dt),
            Published::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Published::At(_))
    }
}

impl From<DateTime<Utc>> for Published {
    fn from(dt: DateTime<Utc>) -> Self {
        Published::At(dt)
    }
}

impl fmt::Display for Published {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Published::At(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Published::Invalid => f.write_str("Invalid Date"),
        }
    }
}

impl Serialize for Published {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Published::At(_) => serializer.collect_str(self),
            Published::Invalid => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Published {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Published::Invalid, Published::parse))
    }
}
