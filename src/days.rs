//! Lazy iteration over every day inside a window.

use chrono::NaiveDate;

/// Iterator over every calendar day from a start date to an end date,
/// inclusive of both.
///
/// Produced by [`Days::between`] and the `days()` methods on windows. Each
/// call to those produces a fresh traversal; a same-day range yields exactly
/// one date.
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Days {
    /// Iterates from `start` to `end` inclusive. An inverted range yields
    /// nothing.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            next: (start <= end).then_some(start),
            last: end,
        }
    }
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let day = self.next?;
        self.next = if day < self.last { day.succ_opt() } else { None };
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => (self.last - next).num_days() as usize + 1,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl std::iter::FusedIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_yields_one() {
        let days: Vec<_> = Days::between(date(2026, 6, 15), date(2026, 6, 15)).collect();
        assert_eq!(days, vec![date(2026, 6, 15)]);
    }

    #[test]
    fn crosses_month_boundary() {
        let days: Vec<_> = Days::between(date(2026, 1, 30), date(2026, 2, 1)).collect();
        assert_eq!(
            days,
            vec![date(2026, 1, 30), date(2026, 1, 31), date(2026, 2, 1)]
        );
    }

    #[test]
    fn crosses_leap_day() {
        let days: Vec<_> = Days::between(date(2024, 2, 28), date(2024, 3, 1)).collect();
        assert_eq!(
            days,
            vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn crosses_year_boundary() {
        let days: Vec<_> = Days::between(date(2026, 12, 30), date(2027, 1, 2)).collect();
        assert_eq!(days.len(), 4);
        assert_eq!(days[1], date(2026, 12, 31));
        assert_eq!(days[2], date(2027, 1, 1));
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let mut days = Days::between(date(2026, 3, 10), date(2026, 3, 1));
        assert_eq!(days.next(), None);
    }

    #[test]
    fn exact_size() {
        let days = Days::between(date(2026, 1, 1), date(2026, 1, 31));
        assert_eq!(days.len(), 31);

        let mut days = Days::between(date(2026, 1, 30), date(2026, 2, 1));
        assert_eq!(days.len(), 3);
        days.next();
        assert_eq!(days.len(), 2);
    }

    #[test]
    fn fused_after_exhaustion() {
        let mut days = Days::between(date(2026, 6, 15), date(2026, 6, 16));
        assert!(days.next().is_some());
        assert!(days.next().is_some());
        assert_eq!(days.next(), None);
        assert_eq!(days.next(), None);
    }
}
