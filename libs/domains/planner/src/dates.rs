//! Lenient timestamp input.
//!
//! Date fields accept a full RFC 3339 timestamp or a bare `YYYY-MM-DD`,
//! which is read as midnight UTC. Responses always carry RFC 3339.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, de};

use crate::patch::Patch;

fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| format!("invalid date '{raw}', expected RFC 3339 or YYYY-MM-DD"))
}

/// `deserialize_with` for `Option<DateTime<Utc>>`; pair with `#[serde(default)]`
pub fn option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse(&raw).map_err(de::Error::custom))
        .transpose()
}

/// `deserialize_with` for `Patch<DateTime<Utc>>`; pair with `#[serde(default)]`
pub fn patch<'de, D>(deserializer: D) -> Result<Patch<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    option(deserializer).map(Patch::from)
}
