//! Quarter windows (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec).

use chrono::{Datelike, NaiveDate};

use crate::days::Days;
use crate::span::AnchoredSpan;
use crate::window::{Period, Step};

/// A window aligned to a calendar quarter. The natural step moves three
/// clamped months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuarterWindow {
    span: AnchoredSpan,
}

impl QuarterWindow {
    /// Window from `d` to the end of its quarter, anchored on the start.
    pub fn starting_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::starting_on(Period::Quarter, d),
        }
    }

    /// Window from the start of its quarter to `d`, anchored on the end.
    pub fn ending_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::ending_on(Period::Quarter, d),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.span.start
    }

    pub fn end(&self) -> NaiveDate {
        self.span.end
    }

    pub fn set_start(&mut self, d: NaiveDate) {
        self.span.set_start(Period::Quarter, d);
    }

    pub fn set_end(&mut self, d: NaiveDate) {
        self.span.set_end(Period::Quarter, d);
    }

    /// Zero-based quarter-of-year of the window's end (0..=3).
    pub fn index(&self) -> u32 {
        (self.span.end.month() - 1) / 3
    }

    /// The window one quarter later.
    pub fn next(&self) -> Self {
        self.shift(3)
    }

    /// The window one quarter earlier.
    pub fn prev(&self) -> Self {
        self.shift(-3)
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

    /// Expands to the full quarter around the anchored endpoint.
    pub fn complete(&self) -> Self {
        Self {
            span: self.span.complete(Period::Quarter),
        }
    }

    /// Iterates every day of the window, inclusive.
    pub fn days(&self) -> Days {
        Days::between(self.start(), self.end())
    }

    fn shift(&self, months: i32) -> Self {
        Self {
            span: self.span.shift_months(Period::Quarter, months),
        }
    }
}
