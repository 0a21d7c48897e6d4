// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compact duration literals: `<digits><unit>` with unit `m`, `h`, `d`, or `w`.
//!
//! Weeks are accepted on input but the canonical shorthand only ever uses
//! minutes, hours, or days. The shorthand is lossy above one hour: it keeps
//! the largest whole unit and drops the remainder.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;
const MINUTES_PER_WEEK: u64 = 7 * MINUTES_PER_DAY;

/// Largest duration we accept, in minutes. Anything beyond this cannot be
/// represented as a [`TimeDelta`].
const MAX_MINUTES: u64 = (i64::MAX / 60_000) as u64;

/// Unit tag of a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl DurationUnit {
    /// The single-letter suffix used in shorthand literals.
    pub fn suffix(self) -> char {
        match self {
            DurationUnit::Minutes => 'm',
            DurationUnit::Hours => 'h',
            DurationUnit::Days => 'd',
            DurationUnit::Weeks => 'w',
        }
    }

    /// Length of one unit in minutes.
    pub fn minutes(self) -> u64 {
        match self {
            DurationUnit::Minutes => 1,
            DurationUnit::Hours => MINUTES_PER_HOUR,
            DurationUnit::Days => MINUTES_PER_DAY,
            DurationUnit::Weeks => MINUTES_PER_WEEK,
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "m" => Some(DurationUnit::Minutes),
            "h" => Some(DurationUnit::Hours),
            "d" => Some(DurationUnit::Days),
            "w" => Some(DurationUnit::Weeks),
            _ => None,
        }
    }
}

/// A non-negative magnitude tagged with its unit.
///
/// Equality compares magnitude and unit as written (`60m != 1h`); use
/// [`Duration::total_minutes`] to compare lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    value: u64,
    unit: DurationUnit,
}

impl Duration {
    /// The empty duration, meaning "no time bound" wherever a bound is built.
    pub const ZERO: Duration = Duration {
        value: 0,
        unit: DurationUnit::Minutes,
    };

    pub const fn new(value: u64, unit: DurationUnit) -> Self {
        Duration { value, unit }
    }

    pub const fn minutes(value: u64) -> Self {
        Duration::new(value, DurationUnit::Minutes)
    }

    pub const fn hours(value: u64) -> Self {
        Duration::new(value, DurationUnit::Hours)
    }

    pub const fn days(value: u64) -> Self {
        Duration::new(value, DurationUnit::Days)
    }

    pub const fn weeks(value: u64) -> Self {
        Duration::new(value, DurationUnit::Weeks)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    /// Total length in minutes (saturating).
    pub fn total_minutes(&self) -> u64 {
        self.value.saturating_mul(self.unit.minutes())
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Converts to a chrono [`TimeDelta`], or `None` when out of range.
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        let minutes = i64::try_from(self.total_minutes()).ok()?;
        TimeDelta::try_minutes(minutes)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_duration(s)
    }
}

/// Parse a duration literal like `30m`, `24h`, `7d`, or `2w`.
///
/// Input is trimmed and lower-cased. Anything that is not exactly
/// `<digits><unit>` is rejected; nothing is clamped.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] describing what is wrong with the input.
pub fn parse_duration(text: &str) -> Result<Duration> {
    let input = text.trim().to_lowercase();

    if input.is_empty() {
        return Err(Error::invalid_duration(text, "empty duration"));
    }
    if input.starts_with('-') {
        return Err(Error::invalid_duration(
            text,
            "negative durations are not allowed",
        ));
    }

    let (num_str, unit_str) = split_number_unit(text, &input)?;

    let unit = DurationUnit::from_suffix(unit_str).ok_or_else(|| {
        if unit_str.starts_with(['.', ',']) {
            Error::invalid_duration(text, "fractional durations are not allowed")
        } else {
            Error::invalid_duration(
                text,
                format!("unknown unit '{unit_str}', valid units are m, h, d, w"),
            )
        }
    })?;

    let value: u64 = num_str
        .parse()
        .map_err(|_| Error::invalid_duration(text, "number is too large"))?;

    let duration = Duration::new(value, unit);
    if duration.total_minutes() > MAX_MINUTES {
        return Err(Error::invalid_duration(text, "duration is too large"));
    }

    Ok(duration)
}

/// Split a lower-cased duration into its digit run and unit suffix.
fn split_number_unit<'a>(original: &str, s: &'a str) -> Result<(&'a str, &'a str)> {
    let num_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());

    if num_end == 0 {
        return Err(Error::invalid_duration(
            original,
            "duration must start with a number",
        ));
    }

    let unit = &s[num_end..];
    if unit.is_empty() {
        return Err(Error::invalid_duration(original, "missing unit"));
    }

    Ok((&s[..num_end], unit))
}

/// Format a duration in its canonical shorthand.
///
/// Picks days when the duration is at least 24 hours, hours when it is at
/// least one hour, and minutes otherwise. The remainder below the chosen
/// unit is dropped, so re-parsing never yields a longer duration.
pub fn format_duration_shorthand(duration: &Duration) -> String {
    let total = duration.total_minutes();
    if total >= MINUTES_PER_DAY {
        format!("{}d", total / MINUTES_PER_DAY)
    } else if total >= MINUTES_PER_HOUR {
        format!("{}h", total / MINUTES_PER_HOUR)
    } else {
        format!("{total}m")
    }
}

#[cfg(test)]
#[path = "duration_tests.rs"]
mod tests;
