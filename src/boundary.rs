//! Canonical period boundaries: the first and last day of the bucket a
//! given date falls in.
//!
//! Week buckets split a month at fixed day thresholds (1-7, 8-14, 15-21,
//! 22-end) and half-month buckets at day 15; quarters and semesters split
//! the year at fixed month thresholds. Every function here is total.

use chrono::{Datelike, NaiveDate};

use crate::date::{month_length, snap_to_last_day_of_month};
use crate::window::Period;

fn with_day(d: NaiveDate, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), day)
        .expect("bucket boundary days exist in every month")
}

fn with_month_day(d: NaiveDate, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), month, day)
        .expect("fixed month boundaries exist in every year")
}

/// First day of the week-of-month bucket containing `d`.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    match d.day() {
        1..=7 => with_day(d, 1),
        8..=14 => with_day(d, 8),
        15..=21 => with_day(d, 15),
        _ => with_day(d, 22),
    }
}

/// Last day of the week-of-month bucket containing `d`.
///
/// The fourth bucket runs to the end of the month, so it spans 7 to 10 days
/// depending on the month length.
pub fn week_end(d: NaiveDate) -> NaiveDate {
    match d.day() {
        1..=7 => with_day(d, 7),
        8..=14 => with_day(d, 14),
        15..=21 => with_day(d, 21),
        _ => snap_to_last_day_of_month(d),
    }
}

/// Reports whether `d` is the final day of its week-of-month bucket.
pub fn is_week_end(d: NaiveDate) -> bool {
    d == week_end(d)
}

/// Zero-based week-of-month bucket index (0..=3).
pub fn week_index(d: NaiveDate) -> u32 {
    match d.day() {
        1..=7 => 0,
        8..=14 => 1,
        15..=21 => 2,
        _ => 3,
    }
}

/// First day of the half-month bucket containing `d` (day 1 or day 16).
pub fn half_month_start(d: NaiveDate) -> NaiveDate {
    if d.day() <= 15 {
        with_day(d, 1)
    } else {
        with_day(d, 16)
    }
}

/// Last day of the half-month bucket containing `d` (day 15 or month end).
pub fn half_month_end(d: NaiveDate) -> NaiveDate {
    if d.day() <= 15 {
        with_day(d, 15)
    } else {
        snap_to_last_day_of_month(d)
    }
}

/// Reports whether `d` is the final day of its half-month bucket.
pub fn is_half_month_end(d: NaiveDate) -> bool {
    d == half_month_end(d)
}

/// First day of the month containing `d`.
pub fn month_start(d: NaiveDate) -> NaiveDate {
    with_day(d, 1)
}

/// Last day of the month containing `d`.
pub fn month_end(d: NaiveDate) -> NaiveDate {
    snap_to_last_day_of_month(d)
}

/// First day of the quarter containing `d` (Jan/Apr/Jul/Oct 1).
pub fn quarter_start(d: NaiveDate) -> NaiveDate {
    let month = (d.month() - 1) / 3 * 3 + 1;
    with_month_day(d, month, 1)
}

/// Last day of the quarter containing `d` (Mar 31, Jun 30, Sep 30, Dec 31).
pub fn quarter_end(d: NaiveDate) -> NaiveDate {
    let month = (d.month() - 1) / 3 * 3 + 3;
    with_month_day(d, month, month_length(d.year(), month as i32))
}

/// Reports whether `d` is the final day of its quarter.
pub fn is_quarter_end(d: NaiveDate) -> bool {
    d == quarter_end(d)
}

/// First day of the semester containing `d` (Jan 1 or Jul 1).
pub fn semester_start(d: NaiveDate) -> NaiveDate {
    if d.month() <= 6 {
        with_month_day(d, 1, 1)
    } else {
        with_month_day(d, 7, 1)
    }
}

/// Last day of the semester containing `d` (Jun 30 or Dec 31).
pub fn semester_end(d: NaiveDate) -> NaiveDate {
    if d.month() <= 6 {
        with_month_day(d, 6, 30)
    } else {
        with_month_day(d, 12, 31)
    }
}

/// Reports whether `d` is the final day of its semester.
pub fn is_semester_end(d: NaiveDate) -> bool {
    d == semester_end(d)
}

/// First day of the year containing `d`.
pub fn year_start(d: NaiveDate) -> NaiveDate {
    with_month_day(d, 1, 1)
}

/// Last day of the year containing `d`.
pub fn year_end(d: NaiveDate) -> NaiveDate {
    with_month_day(d, 12, 31)
}

/// First day of the `period` bucket containing `d`.
///
/// Custom ranges have no canonical boundaries; the date is returned as is.
pub(crate) fn period_start(period: Period, d: NaiveDate) -> NaiveDate {
    match period {
        Period::Week => week_start(d),
        Period::HalfMonth => half_month_start(d),
        Period::Month => month_start(d),
        Period::Quarter => quarter_start(d),
        Period::Semester => semester_start(d),
        Period::Year => year_start(d),
        Period::Custom => d,
    }
}

/// Last day of the `period` bucket containing `d`.
pub(crate) fn period_end(period: Period, d: NaiveDate) -> NaiveDate {
    match period {
        Period::Week => week_end(d),
        Period::HalfMonth => half_month_end(d),
        Period::Month => month_end(d),
        Period::Quarter => quarter_end(d),
        Period::Semester => semester_end(d),
        Period::Year => year_end(d),
        Period::Custom => d,
    }
}

/// Reports whether `d` is the final day of its `period` bucket.
pub(crate) fn is_period_end(period: Period, d: NaiveDate) -> bool {
    d == period_end(period, d)
}
