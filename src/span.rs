//! The anchored span core shared by the week, half-month, month, quarter,
//! and semester windows.
//!
//! A span records which endpoint the caller pinned (the anchor), and whether
//! that endpoint sat on the final day of its period when it was last
//! derived. Every navigation step moves the anchored endpoint, optionally
//! re-snaps it to the period end to keep last-day intent alive, and
//! re-derives the opposite endpoint from the period's boundary functions.

use chrono::NaiveDate;
use tracing::trace;

use crate::boundary::{is_period_end, period_end, period_start};
use crate::date::shift_month_clamp;
use crate::window::Period;

/// Which endpoint of a window the caller originally specified.
///
/// The opposite endpoint is always re-derived from period boundary rules,
/// never navigated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Anchor {
    Start,
    End,
}

/// A `{start, end}` pair with an anchor and a last-day flag.
///
/// The flag is true iff the anchored endpoint sits exactly on the last day
/// of its enclosing period; it is what turns "Jan 31 -> Feb 28 -> Mar 31"
/// into a round trip instead of decaying to Mar 28.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct AnchoredSpan {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) anchor: Anchor,
    pub(crate) last_day: bool,
}

impl AnchoredSpan {
    /// Span running from `d` to the end of its `period` bucket.
    pub(crate) fn starting_on(period: Period, d: NaiveDate) -> Self {
        Self {
            start: d,
            end: period_end(period, d),
            anchor: Anchor::Start,
            last_day: is_period_end(period, d),
        }
    }

    /// Span running from the start of its `period` bucket to `d`.
    pub(crate) fn ending_on(period: Period, d: NaiveDate) -> Self {
        Self {
            start: period_start(period, d),
            end: d,
            anchor: Anchor::End,
            last_day: is_period_end(period, d),
        }
    }

    /// The anchored endpoint, used as the reference for every shift.
    pub(crate) fn anchor_date(&self) -> NaiveDate {
        match self.anchor {
            Anchor::Start => self.start,
            Anchor::End => self.end,
        }
    }

    fn rebuild(&self, period: Period, reference: NaiveDate) -> Self {
        match self.anchor {
            Anchor::Start => Self::starting_on(period, reference),
            Anchor::End => Self::ending_on(period, reference),
        }
    }

    /// End-anchored spans whose endpoint was pinned to the period end keep
    /// that pin after a shift; everyone else keeps the clamped day.
    fn resnap(&self, period: Period, reference: NaiveDate) -> NaiveDate {
        if self.anchor == Anchor::End && self.last_day {
            period_end(period, reference)
        } else {
            reference
        }
    }

    /// Shifts the anchored endpoint by `months` clamped months and
    /// re-derives the span.
    pub(crate) fn shift_months(&self, period: Period, months: i32) -> Self {
        let shifted = shift_month_clamp(self.anchor_date(), months);
        let reference = self.resnap(period, shifted);
        trace!(
            ?period,
            months,
            from = %self.anchor_date(),
            to = %reference,
            "shifted window by months"
        );
        self.rebuild(period, reference)
    }

    /// Shifts the anchored endpoint by an exact day count and re-derives
    /// the span. Used by the week window's natural 7-day step.
    pub(crate) fn shift_days(&self, period: Period, days: i64) -> Self {
        let shifted = self.anchor_date() + chrono::TimeDelta::days(days);
        let reference = self.resnap(period, shifted);
        trace!(
            ?period,
            days,
            from = %self.anchor_date(),
            to = %reference,
            "shifted window by days"
        );
        self.rebuild(period, reference)
    }

    /// Expands to the full canonical `period` bucket around the anchored
    /// endpoint, pinning it to the period end. Idempotent.
    pub(crate) fn complete(&self, period: Period) -> Self {
        let reference = self.anchor_date();
        Self {
            start: period_start(period, reference),
            end: period_end(period, reference),
            anchor: self.anchor,
            last_day: true,
        }
    }

    /// Replaces the start date. The last-day flag tracks the anchored
    /// endpoint, so it is recomputed only for start-anchored spans.
    pub(crate) fn set_start(&mut self, period: Period, d: NaiveDate) {
        self.start = d;
        if self.anchor == Anchor::Start {
            self.last_day = is_period_end(period, d);
        }
    }

    /// Replaces the end date, recomputing the flag for end-anchored spans.
    pub(crate) fn set_end(&mut self, period: Period, d: NaiveDate) {
        self.end = d;
        if self.anchor == Anchor::End {
            self.last_day = is_period_end(period, d);
        }
    }
}
