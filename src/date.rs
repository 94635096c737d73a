//! Day-level Gregorian arithmetic: month lengths, last-day detection, and
//! the clamped month shift.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Strips the time-of-day component, keeping the calendar day.
///
/// Window endpoints carry no time of day; this is the conversion applied at
/// every instant-facing edge of the crate.
pub fn truncate_to_day(t: NaiveDateTime) -> NaiveDate {
    t.date()
}

/// Normalizes an out-of-range month number by carrying into the year.
///
/// Month 13 rolls into January of the following year, month 0 into December
/// of the previous year, and so on for any distance.
fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    let months = month - 1;
    let year = year + months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    (year, month)
}

/// Returns the number of days in the given month (28..=31).
///
/// Out-of-range month numbers carry into the adjacent year, so
/// `month_length(2026, 13)` is the length of January 2027. Leap years follow
/// the proleptic Gregorian rules.
pub fn month_length(year: i32, month: i32) -> u32 {
    let (year, month) = normalize_month(year, month + 1);
    let first_of_next =
        NaiveDate::from_ymd_opt(year, month, 1).expect("normalized month is always valid");
    first_of_next
        .pred_opt()
        .expect("the day before the first of a month always exists")
        .day()
}

/// Reports whether `d` is the final calendar day of its month.
pub fn is_last_day_of_month(d: NaiveDate) -> bool {
    d.day() == month_length(d.year(), d.month() as i32)
}

/// Returns the final calendar day of the month containing `d`.
pub fn snap_to_last_day_of_month(d: NaiveDate) -> NaiveDate {
    let last = month_length(d.year(), d.month() as i32);
    NaiveDate::from_ymd_opt(d.year(), d.month(), last)
        .expect("every month contains its own last day")
}

/// Shifts `d` by `delta` months, clamping the day-of-month to the target
/// month's length.
///
/// Day 31 shifted one month into February lands on day 28 (29 in a leap
/// year), never rolling over into March. This is the safe shift every
/// month-granularity navigation in the crate is built on, deliberately
/// different from naive duration arithmetic.
pub fn shift_month_clamp(d: NaiveDate, delta: i32) -> NaiveDate {
    let (year, month) = normalize_month(d.year(), d.month() as i32 + delta);
    let day = d.day().min(month_length(year, month as i32));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day is always valid")
}
