//! Time zone used to turn forecast timestamps into calendar dates
//!
//! Daily bucketing depends on which zone a timestamp is viewed in: samples
//! near midnight can fall on different dates in different zones. The zone is
//! therefore an explicit setting rather than an implicit property of the host.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Zone in which forecast timestamps are converted to calendar dates
///
/// Parses from `"local"`, `"utc"`, a fixed offset such as `"+05:30"`, or an
/// IANA name such as `"Europe/Berlin"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BucketingZone {
    /// The host's local time zone
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// A fixed UTC offset
    Fixed(FixedOffset),
    /// A named IANA time zone
    Named(chrono_tz::Tz),
}

impl BucketingZone {
    /// Wall-clock date and time of a Unix timestamp in this zone
    ///
    /// Returns `None` if the timestamp is outside chrono's representable range.
    #[must_use]
    pub fn local_datetime(&self, timestamp: i64) -> Option<NaiveDateTime> {
        let utc: DateTime<Utc> = DateTime::from_timestamp(timestamp, 0)?;
        let local = match self {
            Self::Local => utc.with_timezone(&Local).naive_local(),
            Self::Utc => utc.naive_utc(),
            Self::Fixed(offset) => utc.with_timezone(offset).naive_local(),
            Self::Named(tz) => utc.with_timezone(tz).naive_local(),
        };
        Some(local)
    }

    /// Calendar date of a Unix timestamp in this zone
    #[must_use]
    pub fn date_of(&self, timestamp: i64) -> Option<NaiveDate> {
        self.local_datetime(timestamp).map(|dt| dt.date())
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH`
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

impl FromStr for BucketingZone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" => return Ok(Self::Utc),
            _ => {},
        }
        if trimmed.starts_with(['+', '-']) {
            return parse_offset(trimmed)
                .map(Self::Fixed)
                .ok_or_else(|| DomainError::InvalidTimezone(trimmed.to_string()));
        }
        trimmed
            .parse::<chrono_tz::Tz>()
            .map(Self::Named)
            .map_err(|_| DomainError::InvalidTimezone(trimmed.to_string()))
    }
}

impl TryFrom<String> for BucketingZone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BucketingZone> for String {
    fn from(zone: BucketingZone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for BucketingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Utc => write!(f, "utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}
