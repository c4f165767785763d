//! Time construction in the active display time zone.

use std::fmt;
use std::str::FromStr;

use anomaly_chart_common::Error;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Time zone used to place timestamps on the calendar.
///
/// Configured as `"utc"`, `"local"`, a fixed offset such as `"-08:00"` or an
/// IANA zone name such as `"America/Los_Angeles"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    #[default]
    Utc,
    /// The host's local zone, including its DST rules.
    Local,
    Fixed(FixedOffset),
    /// A named zone from the tz database.
    Named(Tz),
}

impl TimeZoneSetting {
    /// Place a Unix epoch millisecond timestamp in this zone.
    ///
    /// Returns `None` for timestamps chrono cannot represent.
    pub fn make_time(&self, timestamp_ms: i64) -> Option<DateTime<FixedOffset>> {
        let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_ms)?;
        let time = match self {
            TimeZoneSetting::Utc => utc.fixed_offset(),
            TimeZoneSetting::Local => utc.with_timezone(&Local).fixed_offset(),
            TimeZoneSetting::Fixed(offset) => utc.with_timezone(offset),
            TimeZoneSetting::Named(tz) => utc.with_timezone(tz).fixed_offset(),
        };
        Some(time)
    }

    /// Whether the timestamp is the first instant of its calendar day in
    /// this zone.
    ///
    /// That is 00:00:00.000 on most days. When a DST transition skips
    /// midnight, the day starts at the first wall-clock time that exists.
    pub fn is_start_of_day(&self, timestamp_ms: i64) -> bool {
        let Some(utc) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
            return false;
        };
        match self {
            TimeZoneSetting::Utc => starts_day(&Utc, utc),
            TimeZoneSetting::Local => starts_day(&Local, utc),
            TimeZoneSetting::Fixed(offset) => starts_day(offset, utc),
            TimeZoneSetting::Named(tz) => starts_day(tz, utc),
        }
    }
}

fn starts_day<Z: TimeZone>(zone: &Z, instant: DateTime<Utc>) -> bool {
    let date = instant.with_timezone(zone).date_naive();
    start_of_day(zone, date).is_some_and(|start| start == instant)
}

/// First existing instant of `date` in `zone`.
///
/// An ambiguous midnight resolves to its earlier instant.
fn start_of_day<Z: TimeZone>(zone: &Z, date: NaiveDate) -> Option<DateTime<Z>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    (0..MINUTES_PER_DAY).find_map(|minute| {
        zone.from_local_datetime(&(midnight + TimeDelta::minutes(minute)))
            .earliest()
    })
}

impl FromStr for TimeZoneSetting {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "utc" | "z" => return Ok(TimeZoneSetting::Utc),
            "local" => return Ok(TimeZoneSetting::Local),
            _ => {}
        }
        if let Some(offset) = parse_offset(trimmed) {
            return Ok(TimeZoneSetting::Fixed(offset));
        }
        trimmed.parse::<Tz>().map(TimeZoneSetting::Named).map_err(|_| {
            Error::TimeZone(format!(
                "'{}' (expected utc, local, +HH:MM or an IANA zone name)",
                s
            ))
        })
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(value: TimeZoneSetting) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Utc => write!(f, "utc"),
            TimeZoneSetting::Local => write!(f, "local"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
            TimeZoneSetting::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Parse `+HH:MM`, `-HH:MM`, `+HHMM` or `+HH`.
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
        4 => (
            digits[..2].parse::<i32>().ok()?,
            digits[2..].parse::<i32>().ok()?,
        ),
        _ => return None,
    };
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
