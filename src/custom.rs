//! Custom windows: arbitrary explicit date ranges.
//!
//! A custom range has no natural month identity, so its natural step slides
//! both endpoints by the range's original duration, keeping the elapsed
//! time exact forever. Month and year steps fall back to clamped month
//! arithmetic with per-endpoint last-day tracking: unlike the period
//! variants, *both* endpoints carry their own intent flag.

use chrono::{NaiveDate, TimeDelta};
use tracing::trace;

use crate::date::{is_last_day_of_month, shift_month_clamp, snap_to_last_day_of_month};
use crate::days::Days;
use crate::error::WindowError;
use crate::window::Step;

/// An explicit `[start, end]` date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomWindow {
    start: NaiveDate,
    end: NaiveDate,
    duration: TimeDelta,
    start_last_day: bool,
    end_last_day: bool,
}

impl CustomWindow {
    /// Builds the range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::InvertedRange`] when `end` precedes `start`.
    /// An inverted range is a caller bug, never repaired into a degraded
    /// window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WindowError> {
        if end < start {
            return Err(WindowError::InvertedRange { start, end });
        }
        Ok(Self {
            start,
            end,
            duration: end - start,
            start_last_day: is_last_day_of_month(start),
            end_last_day: is_last_day_of_month(end),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// The original elapsed time of the range, preserved verbatim by the
    /// natural step.
    pub fn duration(&self) -> TimeDelta {
        self.duration
    }

    /// Replaces the start date, refreshing its last-day flag and the stored
    /// duration. The caller keeps `start <= end`.
    pub fn set_start(&mut self, d: NaiveDate) {
        self.start = d;
        self.start_last_day = is_last_day_of_month(d);
        self.duration = self.end - self.start;
    }

    /// Replaces the end date, refreshing its last-day flag and the stored
    /// duration. The caller keeps `start <= end`.
    pub fn set_end(&mut self, d: NaiveDate) {
        self.end = d;
        self.end_last_day = is_last_day_of_month(d);
        self.duration = self.end - self.start;
    }

    /// Custom windows have no parent unit; the index is always 1.
    pub fn index(&self) -> u32 {
        1
    }

    /// The range slid forward by its own duration.
    pub fn next(&self) -> Self {
        self.slide(1)
    }

    /// The range slid backward by its own duration.
    pub fn prev(&self) -> Self {
        self.slide(-1)
    }

    /// Advances by an explicit step: one clamped month or twelve.
    pub fn next_by(&self, step: Step) -> Self {
        match step {
            Step::Month => self.shift(1),
            Step::Year => self.shift(12),
        }
    }

    /// Retreats by an explicit step: one clamped month or twelve.
    pub fn prev_by(&self, step: Step) -> Self {
        match step {
            Step::Month => self.shift(-1),
            Step::Year => self.shift(-12),
        }
    }

    /// A custom range already is its own canonical period.
    pub fn complete(&self) -> Self {
        *self
    }

    /// Iterates every day of the window, inclusive.
    pub fn days(&self) -> Days {
        Days::between(self.start, self.end)
    }

    /// Both endpoints move by the stored duration, so `end - start` never
    /// drifts no matter how many steps are chained.
    fn slide(&self, direction: i32) -> Self {
        let delta = self.duration * direction;
        trace!(
            duration = self.duration.num_days(),
            direction,
            "sliding custom window"
        );
        Self {
            start: self.start + delta,
            end: self.end + delta,
            ..*self
        }
    }

    /// Clamped month shift of both endpoints, each re-snapped to its
    /// month's last day when it originally held that intent.
    fn shift(&self, months: i32) -> Self {
        let mut start = shift_month_clamp(self.start, months);
        let mut end = shift_month_clamp(self.end, months);
        if self.start_last_day {
            start = snap_to_last_day_of_month(start);
        }
        if self.end_last_day {
            end = snap_to_last_day_of_month(end);
        }
        Self { start, end, ..*self }
    }
}
