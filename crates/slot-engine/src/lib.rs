//! # slot-engine
//!
//! Constraint engine for declaring personal weekly availability.
//!
//! Each weekday holds an ordered list of time slots. The engine decides which start
//! and end times a slot may take, rejects edits that would make slots overlap, and
//! derives the pixel layout used to draw slots on a 24-hour grid.
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` (minutes since midnight, `HH:MM` at the boundary)
//! - [`interval`] — `Interval`, the inclusive overlap rule, grid layout
//! - [`day`] — `DaySchedule`: legal time choices and slot mutations for one day
//! - [`week`] — `Weekday` and the serializable `WeeklySchedule`
//! - [`editor`] — `ScheduleEditor`: per-day `Empty → AwaitingWakeUp → HasSlots` session
//! - [`display`] — 12-hour rendering and grid row labels
//! - [`error`] — Error types

pub mod day;
pub mod display;
pub mod editor;
pub mod error;
pub mod interval;
pub mod time;
pub mod week;

pub use day::{AddOutcome, DaySchedule, SlotField};
pub use editor::{DayState, ScheduleEditor};
pub use error::SlotError;
pub use interval::{Interval, Layout};
pub use time::TimeOfDay;
pub use week::{Weekday, WeeklySchedule};
