//! An interactive editing session over one [`WeeklySchedule`].
//!
//! Each day moves through a small state machine:
//!
//! ```text
//! Empty --add_slot--> AwaitingWakeUp --set_wake_up_time--> HasSlots
//!   ^                      |                                  |
//!   +----cancel_wake_up----+        remove_slot (last one) ---+
//! ```
//!
//! `HasSlots` accepts `add_slot`, `update_slot` and `remove_slot`. There is no
//! terminal state.

use crate::day::{AddOutcome, DaySchedule, SlotField};
use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::time::TimeOfDay;
use crate::week::{Weekday, WeeklySchedule};

/// Editing state of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Empty,
    AwaitingWakeUp,
    HasSlots,
}

/// Owns the schedule for one session and enforces the per-day state machine.
#[derive(Debug, Clone, Default)]
pub struct ScheduleEditor {
    schedule: WeeklySchedule,
    awaiting_wake_up: [bool; 7],
}

impl ScheduleEditor {
    /// Start a session with an empty week.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing a previously exported schedule. No day is awaiting a wake-up time.
    pub fn from_schedule(schedule: WeeklySchedule) -> Self {
        Self {
            schedule,
            awaiting_wake_up: [false; 7],
        }
    }

    pub fn state(&self, day: Weekday) -> DayState {
        if !self.schedule.day(day).is_empty() {
            DayState::HasSlots
        } else if self.awaiting_wake_up[day.index()] {
            DayState::AwaitingWakeUp
        } else {
            DayState::Empty
        }
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        self.schedule.day(day)
    }

    /// Add a slot to `day`. An empty day enters `AwaitingWakeUp` instead.
    pub fn add_slot(&mut self, day: Weekday) -> Result<AddOutcome> {
        let outcome = self.schedule.day_mut(day).add_slot().inspect_err(|e| {
            tracing::warn!(%day, error = %e, "add slot rejected");
        })?;
        if outcome == AddOutcome::AwaitingWakeUp {
            tracing::debug!(%day, "awaiting wake-up time");
            self.awaiting_wake_up[day.index()] = true;
        }
        Ok(outcome)
    }

    /// Complete the two-phase add on an empty day: the first slot becomes `00:00-time`.
    pub fn set_wake_up_time(&mut self, day: Weekday, time: TimeOfDay) -> Result<Interval> {
        if self.state(day) != DayState::AwaitingWakeUp {
            return Err(SlotError::NotAwaitingWakeUp(day));
        }
        let slot = self.schedule.day_mut(day).set_wake_up_time(time)?;
        self.awaiting_wake_up[day.index()] = false;
        Ok(slot)
    }

    /// Leave `AwaitingWakeUp` without choosing a time. No-op in any other state.
    pub fn cancel_wake_up(&mut self, day: Weekday) {
        self.awaiting_wake_up[day.index()] = false;
    }

    pub fn update_slot(
        &mut self,
        day: Weekday,
        index: usize,
        field: SlotField,
        value: TimeOfDay,
    ) -> Result<Interval> {
        self.schedule.day_mut(day).update_slot(index, field, value)
    }

    /// Remove a slot. Removing the last one returns the day to `Empty`.
    pub fn remove_slot(&mut self, day: Weekday, index: usize) -> Interval {
        self.schedule.day_mut(day).remove_slot(index)
    }

    pub fn legal_start_times(&self, day: Weekday, index: usize) -> Vec<TimeOfDay> {
        self.schedule.day(day).legal_start_times(index)
    }

    pub fn legal_end_times(&self, day: Weekday, index: usize, start: TimeOfDay) -> Vec<TimeOfDay> {
        self.schedule.day(day).legal_end_times(index, start)
    }

    pub fn wake_up_times(&self, day: Weekday) -> Vec<TimeOfDay> {
        self.schedule.day(day).wake_up_times()
    }

    /// The whole week, ready for a persistence layer. Logged for diagnostics.
    pub fn export_schedule(&self) -> &WeeklySchedule {
        tracing::info!(
            slots = self.schedule.slot_count(),
            schedule = ?self.schedule,
            "exporting weekly availability"
        );
        &self.schedule
    }

    /// End the session, handing the schedule over.
    pub fn into_schedule(self) -> WeeklySchedule {
        self.schedule
    }
}
