//! Minute-resolution time of day.
//!
//! Times are stored as minutes since midnight and only ever rendered or parsed in the
//! fixed `HH:MM` 24-hour form. Arithmetic never leaves the day: advancing past the
//! last minute clamps to `23:59`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Number of minutes in one day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Granularity of the selectable time grid, and the mandatory gap between slots.
pub const STEP_MINUTES: u16 = 30;

/// Number of values produced by [`TimeOfDay::grid`].
pub const GRID_LEN: usize = (MINUTES_PER_DAY / STEP_MINUTES) as usize;

/// A moment within a single day, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const LAST_MINUTE: TimeOfDay = TimeOfDay(MINUTES_PER_DAY - 1);

    /// Build a time from minutes since midnight (`0..=1439`).
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(SlotError::InvalidTime(format!(
                "{minutes} minutes is past the end of the day"
            )));
        }
        Ok(Self(minutes))
    }

    /// Build a time from an hour (`0..=23`) and minute (`0..=59`).
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!(
                "{hour}:{minute} is not a valid 24-hour time"
            )));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add `minutes`, clamping at `23:59` instead of rolling into the next day.
    pub fn advance(self, minutes: u16) -> Self {
        let total = u32::from(self.0) + u32::from(minutes);
        let clamped = total.min(u32::from(Self::LAST_MINUTE.0));
        // clamped <= 1439, always fits
        Self(clamped as u16)
    }

    /// Advance by one grid step (30 minutes), clamped.
    pub fn plus_step(self) -> Self {
        self.advance(STEP_MINUTES)
    }

    /// True when the time sits exactly on the 30-minute grid.
    pub const fn is_on_grid(self) -> bool {
        self.0 % STEP_MINUTES == 0
    }

    /// The full selectable grid: `00:00, 00:30, ..., 23:30`.
    ///
    /// The returned iterator is cheap to clone, so callers can restart it freely.
    pub fn grid() -> Grid {
        Grid { next: 0 }
    }
}

/// Iterator over the 48 half-hour grid values of a day.
#[derive(Debug, Clone)]
pub struct Grid {
    next: u16,
}

impl Iterator for Grid {
    type Item = TimeOfDay;

    fn next(&mut self) -> Option<TimeOfDay> {
        if self.next >= MINUTES_PER_DAY {
            return None;
        }
        let time = TimeOfDay(self.next);
        self.next += STEP_MINUTES;
        Some(time)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(MINUTES_PER_DAY.saturating_sub(self.next))
            .div_ceil(usize::from(STEP_MINUTES));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Grid {}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Parse the fixed-width `HH:MM` form. `7:00`, `07:00:00` and `24:00` are rejected.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_shaped = bytes.len() == 5
            && bytes[2] == b':'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || b.is_ascii_digit());
        if !well_shaped {
            return Err(SlotError::InvalidTime(format!(
                "'{s}' is not in HH:MM form"
            )));
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self::from)
            .map_err(|e| SlotError::InvalidTime(format!("'{s}': {e}")))
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Seconds and sub-second precision are truncated.
    fn from(t: NaiveTime) -> Self {
        Self((t.hour() * 60 + t.minute()) as u16)
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        // Every TimeOfDay is a valid wall-clock time.
        NaiveTime::from_hms_opt(u32::from(t.hour()), u32::from(t.minute()), 0).unwrap_or_default()
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
