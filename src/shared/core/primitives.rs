use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a stored record. Always a positive integer.
///
/// Foreign keys arrive either as numbers or as numeric strings (`3` or `"3"`); both are
/// normalized here so every comparison downstream is an integer comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub const FIRST: EntityId = EntityId(1);

    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// `None` once the id space is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("identifier must be a positive integer, got {0:?}")]
pub struct ParseIdError(pub String);

impl FromStr for EntityId {
    type Err = ParseIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .and_then(EntityId::new)
            .ok_or_else(|| ParseIdError(raw.to_string()))
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => u64::try_from(n)
                .ok()
                .and_then(EntityId::new)
                .ok_or_else(|| de::Error::custom(ParseIdError(n.to_string()))),
            RawId::Text(s) => s.parse().map_err(de::Error::custom),
        }
    }
}

/// Source of "now". Handlers never read the system time directly.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Monotonically increasing counter handing out time log ids.
#[derive(Debug, Default)]
pub struct Sequence(AtomicU64);

impl Sequence {
    pub fn starting_after(last: u64) -> Self {
        Self(AtomicU64::new(last))
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Accepts `2025-01-01` as well as a full RFC 3339 timestamp and keeps the calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_instant(raw).map(|instant| instant.date_naive()))
}

/// Accepts an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` (read as UTC) or a bare date
/// (midnight UTC).
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `#[serde(default, deserialize_with = "lenient_date")]` for optional date inputs.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {raw:?}"))),
    }
}

/// `#[serde(default, deserialize_with = "lenient_instant")]` for optional timestamp inputs.
pub fn lenient_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_instant(&raw)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw:?}"))),
    }
}
