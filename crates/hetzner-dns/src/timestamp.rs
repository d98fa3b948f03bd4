// # Timestamp Codec
//
// The DNS API is not consistent about how it renders date-times. Depending
// on the endpoint (and apparently on the age of the object) a field may be:
//
// - `2021-01-28T14:23:31Z`                  (RFC 3339)
// - `2021-01-28T14:23:31.123456789+01:00`   (RFC 3339, nanoseconds)
// - `2021-01-28 14:23:31.123 +0000 UTC`     (offset + zone name, millis)
// - `2021-01-28 14:23:31.12 +0000 UTC`
// - `2021-01-28 14:23:31.1 +0000 UTC`
// - `2021-01-28 14:23:31 +0000 UTC`
// - `""`                                    (never set)
//
// `Timestamp` decodes all of them and always encodes back as RFC 3339.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Layouts tried, in order, once strict RFC 3339 parsing has failed
///
/// The trailing `%Z` consumes the zone abbreviation; the numeric offset
/// before it is authoritative.
const FALLBACK_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.3f %z %Z",
    "%Y-%m-%d %H:%M:%S%.f %z %Z",
    "%Y-%m-%d %H:%M:%S %z %Z",
    "%Y-%m-%d %H:%M:%S%.f %z",
];

/// Error returned when a timestamp matches none of the known layouts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("can't parse timestamp {text:?}: no known layout matches")]
pub struct TimestampParseError {
    text: String,
}

impl TimestampParseError {
    /// The text that failed to parse, verbatim
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A provider timestamp
///
/// Either an instant with the UTC offset it was reported in, or the *zero*
/// timestamp (the server sent an empty string or `null`). Equality compares
/// instants, so `12:00+01:00 == 11:00Z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timestamp(Option<DateTime<FixedOffset>>);

impl Timestamp {
    /// The zero timestamp
    pub const ZERO: Timestamp = Timestamp(None);

    /// Parse any of the textual shapes the API is known to emit
    ///
    /// An empty string (or a bare `""` JSON literal) yields [`Timestamp::ZERO`].
    pub fn parse(text: &str) -> Result<Self, TimestampParseError> {
        if text.is_empty() || text == r#""""# {
            return Ok(Self::ZERO);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(Some(dt)));
        }

        FALLBACK_LAYOUTS
            .iter()
            .find_map(|layout| DateTime::parse_from_str(text, layout).ok())
            .map(|dt| Self(Some(dt)))
            .ok_or_else(|| TimestampParseError {
                text: text.to_string(),
            })
    }

    /// Whether this is the zero timestamp
    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    /// The instant with its original offset, unless zero
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        self.0.as_ref()
    }

    /// The instant in UTC, unless zero
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        self.0.map(|dt| dt.with_timezone(&Utc))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(Some(dt.fixed_offset()))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => f.write_str("null"),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Some(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            None => serializer.serialize_none(),
        }
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp string or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse(v).map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::ZERO)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::ZERO)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(TimestampVisitor)
    }
}
