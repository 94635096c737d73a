//! Year windows.
//!
//! Year boundaries are fixed at Jan 1 and Dec 31, so there is no last-day
//! ambiguity to track; the only date a year step can clamp is a Feb 29
//! anchor, which lands on Feb 28.

use chrono::NaiveDate;

use crate::boundary::{year_end, year_start};
use crate::date::shift_month_clamp;
use crate::days::Days;
use crate::span::Anchor;
use crate::window::Step;

/// A window aligned to a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearWindow {
    start: NaiveDate,
    end: NaiveDate,
    anchor: Anchor,
}

impl YearWindow {
    /// Window from `d` to Dec 31 of the same year, anchored on the start.
    pub fn starting_on(d: NaiveDate) -> Self {
        Self {
            start: d,
            end: year_end(d),
            anchor: Anchor::Start,
        }
    }

    /// Window from Jan 1 of the same year to `d`, anchored on the end.
    pub fn ending_on(d: NaiveDate) -> Self {
        Self {
            start: year_start(d),
            end: d,
            anchor: Anchor::End,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Replaces the start date in place.
    pub fn set_start(&mut self, d: NaiveDate) {
        self.start = d;
    }

    /// Replaces the end date in place.
    pub fn set_end(&mut self, d: NaiveDate) {
        self.end = d;
    }

    /// Year windows have no parent unit; the index is always 1.
    pub fn index(&self) -> u32 {
        1
    }

    /// The window one year later.
    pub fn next(&self) -> Self {
        self.shift(12)
    }

    /// The window one year earlier.
    pub fn prev(&self) -> Self {
        self.shift(-12)
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

    /// Expands to the full year around the anchored endpoint.
    pub fn complete(&self) -> Self {
        let reference = self.anchor_date();
        Self {
            start: year_start(reference),
            end: year_end(reference),
            anchor: self.anchor,
        }
    }

    /// Iterates every day of the window, inclusive.
    pub fn days(&self) -> Days {
        Days::between(self.start, self.end)
    }

    fn anchor_date(&self) -> NaiveDate {
        match self.anchor {
            Anchor::Start => self.start,
            Anchor::End => self.end,
        }
    }

    fn shift(&self, months: i32) -> Self {
        let reference = shift_month_clamp(self.anchor_date(), months);
        match self.anchor {
            Anchor::Start => Self::starting_on(reference),
            Anchor::End => Self::ending_on(reference),
        }
    }
}
