//! The seven weekdays and the weekly availability map.
//!
//! `WeeklySchedule` always holds all seven days. It serializes to a JSON object keyed
//! by the full weekday name, each value the day's slot array:
//!
//! ```json
//! {"Monday":[{"start":"00:00","end":"07:00"}],"Tuesday":[],...}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::day::DaySchedule;
use crate::error::{Result, SlotError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Position in the week, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = SlotError;

    /// Accepts full names and three-letter abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                lower == name || lower == name[..3]
            })
            .ok_or_else(|| SlotError::InvalidWeekday(s.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

/// A week of availability: one [`DaySchedule`] per weekday.
///
/// Days missing from serialized input come back empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WeeklySchedule {
    monday: DaySchedule,
    tuesday: DaySchedule,
    wednesday: DaySchedule,
    thursday: DaySchedule,
    friday: DaySchedule,
    saturday: DaySchedule,
    sunday: DaySchedule,
}

impl WeeklySchedule {
    /// A schedule with all seven days empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Iterate days in week order, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> + '_ {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    /// Total number of slots across the week.
    pub fn slot_count(&self) -> usize {
        self.iter().map(|(_, day)| day.len()).sum()
    }

    /// Check every day's invariants, naming the first offending day.
    pub fn validate(&self) -> Result<()> {
        for (weekday, day) in self.iter() {
            day.validate().map_err(|e| match e {
                SlotError::InvalidSchedule(msg) => SlotError::InvalidSchedule(format!("{weekday}: {msg}")),
                other => other,
            })?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| SlotError::InvalidSchedule(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SlotError::InvalidSchedule(e.to_string()))
    }

    /// Parse and validate a schedule produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        let schedule: Self =
            serde_json::from_str(json).map_err(|e| SlotError::InvalidSchedule(e.to_string()))?;
        schedule.validate()?;
        Ok(schedule)
    }
}
