//! Error types for slot-engine operations.

use thiserror::Error;

use crate::interval::Interval;
use crate::week::Weekday;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A mutation would make two slots of the same day overlap.
    /// The schedule is left untouched.
    #[error("time slot {candidate} would overlap slot {conflict_index} ({conflict}); choose a different time")]
    OverlapRejected {
        candidate: Interval,
        conflict_index: usize,
        conflict: Interval,
    },

    #[error("time slot must end after it starts (got {start}-{end})")]
    EmptyInterval { start: String, end: String },

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("no room left for another slot after {0}")]
    DayFull(String),

    #[error("wake-up time is already set to {0}")]
    WakeUpAlreadySet(String),

    #[error("day already has {0} slot(s); a wake-up time can only start an empty day")]
    DayHasSlots(usize),

    #[error("the wake-up slot always starts at 00:00")]
    FixedWakeUpStart,

    #[error("{0} is not waiting for a wake-up time")]
    NotAwaitingWakeUp(Weekday),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid slot field: {0} (expected 'start' or 'end')")]
    InvalidField(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
