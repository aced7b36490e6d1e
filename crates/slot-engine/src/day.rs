//! One weekday's ordered list of slots and the rules for editing it.
//!
//! The first slot of a day is the wake-up slot: it always starts at `00:00` and its
//! end is the wake-up time. Removing the wake-up slot leaves an ordinary first slot
//! whose start may move freely; the day has no wake-up time until that slot is moved
//! back to `00:00`. Every later slot starts at least one grid step (30 min)
//! after the previous slot ends. Slots never overlap under the inclusive rule of
//! [`Interval::overlaps`], so a day's slots stay sorted by start after every
//! successful mutation.
//!
//! Slot indices passed to this module must be in range. An out-of-range index is a
//! caller bug and panics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::Interval;
use crate::time::TimeOfDay;

/// Which boundary of a slot an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotField {
    Start,
    End,
}

impl FromStr for SlotField {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(SlotField::Start),
            "end" => Ok(SlotField::End),
            _ => Err(SlotError::InvalidField(s.to_string())),
        }
    }
}

impl fmt::Display for SlotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotField::Start => "start",
            SlotField::End => "end",
        })
    }
}

/// Result of asking a day for a new slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The day had no slots: a wake-up time must be chosen before anything else.
    AwaitingWakeUp,
    /// A default 30-minute block was appended after the last slot.
    Added(Interval),
}

/// The slots of a single weekday, sorted by start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySchedule {
    slots: Vec<Interval>,
}

impl DaySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a day from raw slots, checking every invariant.
    pub fn from_slots(slots: Vec<Interval>) -> Result<Self> {
        let day = Self { slots };
        day.validate()?;
        Ok(day)
    }

    pub fn slots(&self) -> &[Interval] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Interval> {
        self.slots.get(index)
    }

    /// End of the wake-up slot, if the day starts with one.
    pub fn wake_up_time(&self) -> Option<TimeOfDay> {
        self.slots
            .first()
            .filter(|slot| slot.start == TimeOfDay::MIDNIGHT)
            .map(|slot| slot.end)
    }

    fn has_wake_up_slot(&self) -> bool {
        self.wake_up_time().is_some()
    }

    fn slot(&self, index: usize) -> &Interval {
        assert!(
            index < self.slots.len(),
            "slot index {index} out of range for a day with {} slot(s)",
            self.slots.len()
        );
        &self.slots[index]
    }

    /// Reject `candidate` if it overlaps any slot other than the one at `excluding`.
    ///
    /// The error names the first conflicting slot in day order.
    pub fn validate_no_overlap(&self, candidate: &Interval, excluding: Option<usize>) -> Result<()> {
        let conflict = self
            .slots
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != excluding)
            .find(|(_, slot)| candidate.overlaps(slot));

        match conflict {
            Some((conflict_index, conflict)) => Err(SlotError::OverlapRejected {
                candidate: *candidate,
                conflict_index,
                conflict: *conflict,
            }),
            None => Ok(()),
        }
    }

    fn accepts(&self, candidate: &Interval, excluding: Option<usize>) -> bool {
        candidate.is_well_formed() && self.validate_no_overlap(candidate, excluding).is_ok()
    }

    /// Earliest start the slot at `index` may take: `00:00` for the wake-up slot,
    /// otherwise the previous slot's end plus 30 minutes.
    pub fn min_start(&self, index: usize) -> TimeOfDay {
        self.slot(index);
        match index {
            0 => TimeOfDay::MIDNIGHT,
            _ => self.slots[index - 1].end.plus_step(),
        }
    }

    /// Grid times the slot at `index` may start at.
    ///
    /// The wake-up slot only offers `00:00`. Other slots offer grid times from
    /// [`min_start`](Self::min_start) onward that keep the slot non-empty and clear
    /// of every other slot.
    pub fn legal_start_times(&self, index: usize) -> Vec<TimeOfDay> {
        let slot = *self.slot(index);
        if index == 0 && self.has_wake_up_slot() {
            return vec![TimeOfDay::MIDNIGHT];
        }

        let min = self.min_start(index);
        TimeOfDay::grid()
            .filter(|&t| t >= min)
            .filter(|&t| self.accepts(&Interval { start: t, end: slot.end }, Some(index)))
            .collect()
    }

    /// Grid times the slot at `index` may end at, given it starts at `start`.
    ///
    /// Only times strictly after `start` are offered, and none that would make the
    /// slot overlap another one.
    pub fn legal_end_times(&self, index: usize, start: TimeOfDay) -> Vec<TimeOfDay> {
        self.slot(index);
        TimeOfDay::grid()
            .filter(|&t| t > start)
            .filter(|&t| self.accepts(&Interval { start, end: t }, Some(index)))
            .collect()
    }

    /// Wake-up choices for an empty day: every grid time after `00:00`.
    /// A day that already has slots offers none.
    pub fn wake_up_times(&self) -> Vec<TimeOfDay> {
        if !self.is_empty() {
            return Vec::new();
        }
        TimeOfDay::grid().filter(|&t| t > TimeOfDay::MIDNIGHT).collect()
    }

    /// Append the default block after the last slot, or report that the day needs a
    /// wake-up time first.
    pub fn add_slot(&mut self) -> Result<AddOutcome> {
        let Some(last) = self.slots.last().copied() else {
            return Ok(AddOutcome::AwaitingWakeUp);
        };

        let start = last.end.plus_step();
        let candidate = Interval {
            start,
            end: start.plus_step(),
        };
        if !candidate.is_well_formed() {
            tracing::warn!(after = %last.end, "no room left for another slot");
            return Err(SlotError::DayFull(last.end.to_string()));
        }
        self.validate_no_overlap(&candidate, None)?;

        self.slots.push(candidate);
        tracing::debug!(slot = %candidate, index = self.slots.len() - 1, "added slot");
        Ok(AddOutcome::Added(candidate))
    }

    /// Set the wake-up slot `00:00-time`. Only legal while the day is empty.
    pub fn set_wake_up_time(&mut self, time: TimeOfDay) -> Result<Interval> {
        if let Some(existing) = self.wake_up_time() {
            return Err(SlotError::WakeUpAlreadySet(existing.to_string()));
        }
        if !self.is_empty() {
            return Err(SlotError::DayHasSlots(self.slots.len()));
        }

        let slot = Interval::new(TimeOfDay::MIDNIGHT, time)?;
        self.slots.push(slot);
        tracing::debug!(wake_up = %time, "set wake-up time");
        Ok(slot)
    }

    /// Change one boundary of the slot at `index`.
    ///
    /// Both fields are checked: the result must end after it starts and stay clear
    /// of every other slot. On rejection the day is left unchanged.
    pub fn update_slot(&mut self, index: usize, field: SlotField, value: TimeOfDay) -> Result<Interval> {
        let current = *self.slot(index);
        let updated = match field {
            SlotField::Start => Interval { start: value, ..current },
            SlotField::End => Interval { end: value, ..current },
        };

        if let Err(err) = self.check_update(index, field, &updated) {
            tracing::warn!(index, %field, %value, error = %err, "slot update rejected");
            return Err(err);
        }

        self.slots[index] = updated;
        tracing::debug!(index, slot = %updated, "updated slot");
        Ok(updated)
    }

    fn check_update(&self, index: usize, field: SlotField, updated: &Interval) -> Result<()> {
        if index == 0
            && field == SlotField::Start
            && self.has_wake_up_slot()
            && updated.start != TimeOfDay::MIDNIGHT
        {
            return Err(SlotError::FixedWakeUpStart);
        }
        updated.check_well_formed()?;
        self.validate_no_overlap(updated, Some(index))
    }

    /// Remove the slot at `index`; later slots shift down by one.
    ///
    /// Neighbouring slots are not re-validated against the gap rule.
    pub fn remove_slot(&mut self, index: usize) -> Interval {
        self.slot(index);
        let removed = self.slots.remove(index);
        tracing::debug!(index, slot = %removed, "removed slot");
        removed
    }

    /// Check the invariants of a day loaded from outside: every slot non-empty,
    /// slots sorted by start, no two slots overlapping.
    pub fn validate(&self) -> Result<()> {
        if let Some((i, slot)) = self.slots.iter().enumerate().find(|(_, s)| !s.is_well_formed()) {
            return Err(SlotError::InvalidSchedule(format!(
                "slot {i} ({slot}) must end after it starts"
            )));
        }

        if let Some(i) = self
            .slots
            .windows(2)
            .position(|pair| pair[0].start >= pair[1].start)
        {
            return Err(SlotError::InvalidSchedule(format!(
                "slot {} does not start after slot {i}",
                i + 1
            )));
        }

        for (i, slot) in self.slots.iter().enumerate() {
            if let Err(SlotError::OverlapRejected { conflict_index, .. }) =
                self.validate_no_overlap(slot, Some(i))
            {
                return Err(SlotError::InvalidSchedule(format!(
                    "slot {i} ({slot}) overlaps slot {conflict_index}"
                )));
            }
        }

        Ok(())
    }
}
