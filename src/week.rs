//! Week-of-month windows.
//!
//! A month splits into four fixed buckets: days 1-7, 8-14, 15-21, and 22 to
//! the month end. The natural step moves exactly 7 days; month and year
//! steps use clamped month arithmetic, which keeps the reference inside its
//! original bucket.

use chrono::NaiveDate;

use crate::boundary::week_index;
use crate::days::Days;
use crate::span::AnchoredSpan;
use crate::window::{Period, Step};

/// A window aligned to a week-of-month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekWindow {
    span: AnchoredSpan,
}

impl WeekWindow {
    /// Window from `d` to the end of its week bucket, anchored on the start.
    pub fn starting_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::starting_on(Period::Week, d),
        }
    }

    /// Window from the start of its week bucket to `d`, anchored on the end.
    pub fn ending_on(d: NaiveDate) -> Self {
        Self {
            span: AnchoredSpan::ending_on(Period::Week, d),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.span.start
    }

    pub fn end(&self) -> NaiveDate {
        self.span.end
    }

    pub fn set_start(&mut self, d: NaiveDate) {
        self.span.set_start(Period::Week, d);
    }

    pub fn set_end(&mut self, d: NaiveDate) {
        self.span.set_end(Period::Week, d);
    }

    /// Zero-based week-of-month bucket of the window's end (0..=3).
    pub fn index(&self) -> u32 {
        week_index(self.span.end)
    }

    /// The window exactly 7 days later.
    pub fn next(&self) -> Self {
        Self {
            span: self.span.shift_days(Period::Week, 7),
        }
    }

    /// The window exactly 7 days earlier.
    pub fn prev(&self) -> Self {
        Self {
            span: self.span.shift_days(Period::Week, -7),
        }
    }

    /// Advances by an explicit step: one clamped month or one year.
    pub fn next_by(&self, step: Step) -> Self {
        match step {
            Step::Month => self.shift(1),
            Step::Year => self.shift(12),
        }
    }

    /// Retreats by an explicit step: one clamped month or one year.
    pub fn prev_by(&self, step: Step) -> Self {
        match step {
            Step::Month => self.shift(-1),
            Step::Year => self.shift(-12),
        }
    }

    /// Expands to the full week bucket around the anchored endpoint.
    pub fn complete(&self) -> Self {
        Self {
            span: self.span.complete(Period::Week),
        }
    }

    /// Iterates every day of the window, inclusive.
    pub fn days(&self) -> Days {
        Days::between(self.start(), self.end())
    }

    fn shift(&self, months: i32) -> Self {
        Self {
            span: self.span.shift_months(Period::Week, months),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_window(w: &WeekWindow, start: NaiveDate, end: NaiveDate) {
        assert_eq!(w.start(), start, "start mismatch");
        assert_eq!(w.end(), end, "end mismatch");
    }

    #[test]
    fn starting_on_each_bucket() {
        assert_window(
            &WeekWindow::starting_on(date(2026, 3, 3)),
            date(2026, 3, 3),
            date(2026, 3, 7),
        );
        assert_window(
            &WeekWindow::starting_on(date(2026, 3, 10)),
            date(2026, 3, 10),
            date(2026, 3, 14),
        );
        assert_window(
            &WeekWindow::starting_on(date(2026, 3, 18)),
            date(2026, 3, 18),
            date(2026, 3, 21),
        );
        assert_window(
            &WeekWindow::starting_on(date(2026, 3, 25)),
            date(2026, 3, 25),
            date(2026, 3, 31),
        );
    }

    #[test]
    fn ending_on_each_bucket() {
        assert_window(
            &WeekWindow::ending_on(date(2026, 3, 5)),
            date(2026, 3, 1),
            date(2026, 3, 5),
        );
        assert_window(
            &WeekWindow::ending_on(date(2026, 3, 14)),
            date(2026, 3, 8),
            date(2026, 3, 14),
        );
        assert_window(
            &WeekWindow::ending_on(date(2026, 3, 21)),
            date(2026, 3, 15),
            date(2026, 3, 21),
        );
        assert_window(
            &WeekWindow::ending_on(date(2026, 3, 31)),
            date(2026, 3, 22),
            date(2026, 3, 31),
        );
    }

    #[test]
    fn next_moves_seven_days() {
        let w = WeekWindow::ending_on(date(2026, 3, 5)).next();
        assert_window(&w, date(2026, 3, 8), date(2026, 3, 12));

        let w = WeekWindow::starting_on(date(2026, 3, 10)).next();
        assert_window(&w, date(2026, 3, 17), date(2026, 3, 21));
    }

    #[test]
    fn next_preserves_bucket_end_intent() {
        // Ending on a month's last day: 7 days later is Feb 7, itself a
        // bucket end, so the pin holds.
        let w = WeekWindow::ending_on(date(2026, 1, 31)).next();
        assert_window(&w, date(2026, 2, 1), date(2026, 2, 7));

        // Ending on day 21: the shifted reference re-snaps to the fourth
        // bucket's end.
        let w = WeekWindow::ending_on(date(2026, 3, 21)).next();
        assert_window(&w, date(2026, 3, 22), date(2026, 3, 31));
    }

    #[test]
    fn prev_moves_seven_days() {
        let w = WeekWindow::ending_on(date(2026, 3, 10)).prev();
        assert_window(&w, date(2026, 3, 1), date(2026, 3, 3));
    }

    #[test]
    fn next_then_prev_round_trips_full_buckets() {
        let w = WeekWindow::ending_on(date(2026, 3, 31));
        let round = w.next().prev();
        assert_window(&round, w.start(), w.end());
    }

    #[test]
    fn year_step_lands_in_same_bucket() {
        let w = WeekWindow::ending_on(date(2026, 3, 14)).next_by(Step::Year);
        assert_window(&w, date(2027, 3, 8), date(2027, 3, 14));

        let w = WeekWindow::ending_on(date(2026, 3, 14)).prev_by(Step::Year);
        assert_window(&w, date(2025, 3, 8), date(2025, 3, 14));
    }

    #[test]
    fn month_step_preserves_last_day_intent() {
        let w = WeekWindow::ending_on(date(2026, 1, 31)).next_by(Step::Month);
        assert_window(&w, date(2026, 2, 22), date(2026, 2, 28));

        let w = WeekWindow::ending_on(date(2026, 3, 31)).prev_by(Step::Month);
        assert_window(&w, date(2026, 2, 22), date(2026, 2, 28));
    }

    #[test]
    fn complete_expands_to_full_bucket() {
        let w = WeekWindow::ending_on(date(2026, 3, 5)).complete();
        assert_window(&w, date(2026, 3, 1), date(2026, 3, 7));

        let w = WeekWindow::starting_on(date(2026, 3, 28)).complete();
        assert_window(&w, date(2026, 3, 22), date(2026, 3, 31));
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(WeekWindow::ending_on(date(2026, 3, 5)).index(), 0);
        assert_eq!(WeekWindow::ending_on(date(2026, 3, 14)).index(), 1);
        assert_eq!(WeekWindow::starting_on(date(2026, 3, 18)).index(), 2);
        assert_eq!(WeekWindow::starting_on(date(2026, 3, 25)).index(), 3);
    }
}
