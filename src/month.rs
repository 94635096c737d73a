//! Month windows.

use chrono::{Datelike, NaiveDate};

use crate::days::Days;
use crate::span::AnchoredSpan;
use crate::window::{Period, Step};

/// A window aligned to a calendar month.
///
/// The natural step moves one clamped month; a window ending on the last
/// day of its month keeps ending on the last day of every subsequent month,
/// including across February and leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthWindow {
    span: AnchoredSpan,
}

impl MonthWindow {
    /// Window from `d` to the end of its month, anchored on the start.
    pub fn starting_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::starting_on(Period::Month, d),
        }
    }

    /// Window from the first of the month to `d`, anchored on the end.
    pub fn ending_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::ending_on(Period::Month, d),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.span.start
    }

    pub fn end(&self) -> NaiveDate {
        self.span.end
    }

    /// Replaces the start date in place, recomputing last-day intent when
    /// the start is the anchored endpoint.
    pub fn set_start(&mut self, d: NaiveDate) {
        self.span.set_start(Period::Month, d);
    }

    /// Replaces the end date in place, recomputing last-day intent when the
    /// end is the anchored endpoint.
    pub fn set_end(&mut self, d: NaiveDate) {
        self.span.set_end(Period::Month, d);
    }

    /// Month-of-year of the window's end (1..=12).
    pub fn index(&self) -> u32 {
        self.span.end.month()
    }

    /// The window one month later.
    pub fn next(&self) -> Self {
        self.shift(1)
    }

    /// The window one month earlier.
    pub fn prev(&self) -> Self {
        self.shift(-1)
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

    /// Expands to the full month around the anchored endpoint.
    pub fn complete(&self) -> Self {
        Self {
            span: self.span.complete(Period::Month),
        }
    }

    /// Iterates every day of the window, inclusive.
    pub fn days(&self) -> Days {
        Days::between(self.start(), self.end())
    }

    fn shift(&self, months: i32) -> Self {
        Self {
            span: self.span.shift_months(Period::Month, months),
        }
    }
}
