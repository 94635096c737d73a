//! Semester windows (Jan-Jun, Jul-Dec).

use chrono::{Datelike, NaiveDate};

use crate::days::Days;
use crate::span::AnchoredSpan;
use crate::window::{Period, Step};

/// A window aligned to a half-year. The natural step moves six clamped
/// months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemesterWindow {
    span: AnchoredSpan,
}

impl SemesterWindow {
    /// Window from `d` to the end of its semester, anchored on the start.
    pub fn starting_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::starting_on(Period::Semester, d),
        }
    }

    /// Window from the start of its semester to `d`, anchored on the end.
    pub fn ending_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::ending_on(Period::Semester, d),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.span.start
    }

    pub fn end(&self) -> NaiveDate {
        self.span.end
    }

    pub fn set_start(&mut self, d: NaiveDate) {
        self.span.set_start(Period::Semester, d);
    }

    pub fn set_end(&mut self, d: NaiveDate) {
        self.span.set_end(Period::Semester, d);
    }

    /// Semester-of-year of the window's end: 0 for Jan-Jun, 1 for Jul-Dec.
    pub fn index(&self) -> u32 {
        if self.span.end.month() <= 6 { 0 } else { 1 }
    }

    /// The window one semester later.
    pub fn next(&self) -> Self {
        self.shift(6)
    }

    /// The window one semester earlier.
    pub fn prev(&self) -> Self {
        self.shift(-6)
    }

    /// Advances by an explicit step: one month or one year.
    pub fn next_by(&self, step: Step) -> Self {
        match step {
            Step::Month => self.shift(1),
            Step::Year => self.shift(12),
        }
    }

    /// Retreats by an explicit step: one month or one year.
    pub fn prev_by(&self, step: Step) -> Self {
        match step {
            Step::Month => self.shift(-1),
            Step::Year => self.shift(-12),
        }
    }

    /// Expands to the full semester around the anchored endpoint.
    pub fn complete(&self) -> Self {
        Self {
            span: self.span.complete(Period::Semester),
        }
    }

    /// Iterates every day of the window, inclusive.
    pub fn days(&self) -> Days {
        Days::between(self.start(), self.end())
    }

    fn shift(&self, months: i32) -> Self {
        Self {
            span: self.span.shift_months(Period::Semester, months),
        }
    }
}
