//! Half-month windows.
//!
//! A month splits at day 15: days 1-15 and days 16 to the month end. The
//! natural step is one clamped month, so a window over the second half of
//! January moves to the second half of February.

use chrono::{Datelike, NaiveDate};

use crate::days::Days;
use crate::span::AnchoredSpan;
use crate::window::{Period, Step};

/// A window aligned to a half-month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfMonthWindow {
    span: AnchoredSpan,
}

impl HalfMonthWindow {
    /// Window from `d` to the end of its half-month bucket, anchored on the
    /// start.
    pub fn starting_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::starting_on(Period::HalfMonth, d),
        }
    }

    /// Window from the start of its half-month bucket to `d`, anchored on
    /// the end.
    pub fn ending_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::ending_on(Period::HalfMonth, d),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.span.start
    }

    pub fn end(&self) -> NaiveDate {
        self.span.end
    }

    pub fn set_start(&mut self, d: NaiveDate) {
        self.span.set_start(Period::HalfMonth, d);
    }

    pub fn set_end(&mut self, d: NaiveDate) {
        self.span.set_end(Period::HalfMonth, d);
    }

    /// Half-of-month of the window's end: 0 for days 1-15, 1 otherwise.
    pub fn index(&self) -> u32 {
        if self.span.end.day() >= 16 { 1 } else { 0 }
    }

    /// The window one month later, same half.
    pub fn next(&self) -> Self {
        self.shift(1)
    }

    /// The window one month earlier, same half.
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

    /// Expands to the full half-month bucket around the anchored endpoint.
    pub fn complete(&self) -> Self {
        Self {
            span: self.span.complete(Period::HalfMonth),
        }
    }

    /// Iterates every day of the window, inclusive.
    pub fn days(&self) -> Days {
        Days::between(self.start(), self.end())
    }

    fn shift(&self, months: i32) -> Self {
        Self {
            span: self.span.shift_months(Period::HalfMonth, months),
        }
    }
}
