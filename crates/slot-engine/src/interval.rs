//! Time slots within a single day, the inclusive overlap rule, and grid layout.
//!
//! Unlike calendar conflict detection, slots that merely touch (one ends exactly when
//! the next starts) DO overlap here. Consecutive blocks must keep a visible gap.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::time::TimeOfDay;

/// Vertical scale of the day grid.
pub const PIXELS_PER_HOUR: f64 = 40.0;

/// Height of a full 24-hour grid at [`PIXELS_PER_HOUR`].
pub const GRID_HEIGHT: f64 = 24.0 * PIXELS_PER_HOUR;

/// A contiguous block of time within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Pixel placement of an interval on the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub top: f64,
    pub height: f64,
}

impl Interval {
    /// Build an interval, rejecting `start >= end`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        let interval = Self { start, end };
        interval.check_well_formed()?;
        Ok(interval)
    }

    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    pub(crate) fn check_well_formed(&self) -> Result<()> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(SlotError::EmptyInterval {
                start: self.start.to_string(),
                end: self.end.to_string(),
            })
        }
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether `time` lies within `[start, end]`, both ends inclusive.
    pub fn contains(&self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }

    /// Inclusive overlap: `self` starts or ends inside `other`, or fully contains it.
    ///
    /// Touching boundaries (`self.end == other.start`) count as overlapping.
    pub fn overlaps(&self, other: &Interval) -> bool {
        other.contains(self.start)
            || other.contains(self.end)
            || (self.start <= other.start && self.end >= other.end)
    }

    /// Placement on the default 40 px/hour grid.
    pub fn layout(&self) -> Layout {
        self.layout_scaled(PIXELS_PER_HOUR)
    }

    pub fn layout_scaled(&self, pixels_per_hour: f64) -> Layout {
        let start = f64::from(self.start.minutes());
        let end = f64::from(self.end.minutes());
        Layout {
            top: (start / 60.0) * pixels_per_hour,
            height: ((end - start) / 60.0) * pixels_per_hour,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
