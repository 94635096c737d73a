use chrono::{Datelike, NaiveDate};
use timespan::{Period, Step, Window};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn assert_range(w: &Window, start: NaiveDate, end: NaiveDate) {
    assert_eq!(w.start(), start, "start mismatch");
    assert_eq!(w.end(), end, "end mismatch");
}

const ALL_PERIODS: [Period; 7] = [
    Period::Week,
    Period::HalfMonth,
    Period::Month,
    Period::Quarter,
    Period::Semester,
    Period::Year,
    Period::Custom,
];

#[test]
fn ordering_holds_under_chained_navigation() {
    for period in ALL_PERIODS {
        let mut w = Window::ending_on(period, date(2026, 1, 31));
        for _ in 0..40 {
            w = w.next();
            assert!(w.start() <= w.end(), "{period} forward: {w:?}");
        }
        for _ in 0..80 {
            w = w.prev();
            assert!(w.start() <= w.end(), "{period} backward: {w:?}");
        }
        let stepped = w.next_by(Step::Month).prev_by(Step::Year);
        assert!(stepped.start() <= stepped.end(), "{period} stepped: {stepped:?}");
    }
}

#[test]
fn last_day_intent_survives_a_full_year_of_month_steps() {
    // Ending on Jan 31 and stepping month by month pins the end to each
    // month's last day, through February and back out again.
    let mut w = Window::ending_on(Period::Month, date(2024, 1, 31));
    let ends = [
        date(2024, 2, 29),
        date(2024, 3, 31),
        date(2024, 4, 30),
        date(2024, 5, 31),
        date(2024, 6, 30),
        date(2024, 7, 31),
        date(2024, 8, 31),
        date(2024, 9, 30),
        date(2024, 10, 31),
        date(2024, 11, 30),
        date(2024, 12, 31),
        date(2025, 1, 31),
        date(2025, 2, 28),
    ];
    for expected in ends {
        w = w.next();
        assert_eq!(w.end(), expected);
        assert_eq!(w.start(), date(expected.year(), expected.month(), 1));
    }
}

#[test]
fn clamp_is_not_undone_for_start_anchors() {
    // A start pinned to Jan 31 clamps to Feb 28 going forward; coming back
    // it stays on the 28th, because a start date carries no last-day
    // intent.
    let w = Window::starting_on(Period::Month, date(2026, 1, 31));
    let forward = w.next();
    assert_eq!(forward.start(), date(2026, 2, 28));
    let back = forward.prev();
    assert_eq!(back.start(), date(2026, 1, 28));
}

#[test]
fn mid_period_round_trips_are_exact() {
    for period in ALL_PERIODS {
        let w = Window::ending_on(period, date(2026, 5, 20));
        let round = w.next().prev();
        assert_range(&round, w.start(), w.end());

        let year_round = w.next_by(Step::Year).prev_by(Step::Year);
        assert_range(&year_round, w.start(), w.end());
    }
}

#[test]
fn year_step_equals_twelve_month_steps_off_boundary() {
    let w = Window::ending_on(Period::Month, date(2026, 4, 15));
    let mut stepped = w;
    for _ in 0..12 {
        stepped = stepped.next_by(Step::Month);
    }
    let jumped = w.next_by(Step::Year);
    assert_range(&jumped, stepped.start(), stepped.end());
}

#[test]
fn complete_is_idempotent() {
    for period in ALL_PERIODS {
        let w = Window::ending_on(period, date(2026, 5, 20)).complete();
        let again = w.complete();
        assert_range(&again, w.start(), w.end());
    }
}

#[test]
fn complete_covers_the_anchor() {
    for period in ALL_PERIODS {
        let anchor = date(2026, 5, 20);
        let full = Window::ending_on(period, anchor).complete();
        assert!(full.contains_date(anchor), "{period}: {full:?}");
    }
}

#[test]
fn custom_duration_never_drifts() {
    let w = Window::starting_on(Period::Custom, date(2026, 1, 30));
    // Single-day custom window: next is the same day again.
    assert_range(&w.next(), date(2026, 1, 30), date(2026, 1, 30));

    let mut longer = Window::Custom(
        timespan::CustomWindow::new(date(2026, 1, 22), date(2026, 2, 4)).unwrap(),
    );
    for _ in 0..30 {
        longer = longer.next();
        assert_eq!((longer.end() - longer.start()).num_days(), 13);
    }
    for _ in 0..60 {
        longer = longer.prev();
        assert_eq!((longer.end() - longer.start()).num_days(), 13);
    }
}

#[test]
fn week_steps_are_exactly_seven_days() {
    let mut w = Window::ending_on(Period::Week, date(2026, 5, 20));
    for _ in 0..10 {
        let n = w.next();
        // Only boundary-intent re-snapping may bend the 7-day stride, and
        // May 20 starts mid-bucket.
        assert_eq!((n.end() - w.end()).num_days(), 7);
        w = n;
    }
}

#[test]
fn day_iteration_counts_match_the_range() {
    let feb = Window::ending_on(Period::Month, date(2024, 2, 29)).complete();
    assert_eq!(feb.days().count(), 29);

    let year = Window::ending_on(Period::Year, date(2023, 12, 31)).complete();
    assert_eq!(year.days().count(), 365);

    let leap_year = Window::ending_on(Period::Year, date(2024, 12, 31)).complete();
    assert_eq!(leap_year.days().count(), 366);
}
