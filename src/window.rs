//! The polymorphic window contract: one closed enum over the seven window
//! kinds, generic period-keyed constructors, and containment queries.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::custom::CustomWindow;
use crate::days::Days;
use crate::error::WindowError;
use crate::half_month::HalfMonthWindow;
use crate::month::MonthWindow;
use crate::quarter::QuarterWindow;
use crate::semester::SemesterWindow;
use crate::week::WeekWindow;
use crate::year::YearWindow;

/// The granularity a window is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Week,
    HalfMonth,
    Month,
    Quarter,
    Semester,
    Year,
    Custom,
}

impl Period {
    /// The canonical lowercase name, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::HalfMonth => "halfmonth",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Semester => "semester",
            Period::Year => "year",
            Period::Custom => "custom",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, WindowError> {
        match s {
            "week" => Ok(Period::Week),
            "halfmonth" => Ok(Period::HalfMonth),
            "month" => Ok(Period::Month),
            "quarter" => Ok(Period::Quarter),
            "semester" => Ok(Period::Semester),
            "year" => Ok(Period::Year),
            "custom" => Ok(Period::Custom),
            _ => Err(WindowError::UnknownPeriod {
                name: s.to_string(),
            }),
        }
    }
}

/// An explicit navigation step for [`Window::next_by`] / [`Window::prev_by`].
///
/// The natural by-period step is the implicit default of `next()`/`prev()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Exactly one clamped calendar month.
    Month,
    /// Exactly one calendar year (twelve clamped months).
    Year,
}

impl Step {
    /// The canonical lowercase name, also accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Month => "month",
            Step::Year => "year",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Step {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self, WindowError> {
        match s {
            "month" => Ok(Step::Month),
            "year" => Ok(Step::Year),
            _ => Err(WindowError::UnknownStep {
                name: s.to_string(),
            }),
        }
    }
}

/// Any of the seven window kinds behind one navigation contract.
///
/// Every operation returns a window of the same kind; the enum exists so
/// callers can pick the granularity at runtime via [`Window::starting_on`]
/// and [`Window::ending_on`] and still navigate uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    Week(WeekWindow),
    HalfMonth(HalfMonthWindow),
    Month(MonthWindow),
    Quarter(QuarterWindow),
    Semester(SemesterWindow),
    Year(YearWindow),
    Custom(CustomWindow),
}

macro_rules! dispatch {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            Window::Week($w) => $body,
            Window::HalfMonth($w) => $body,
            Window::Month($w) => $body,
            Window::Quarter($w) => $body,
            Window::Semester($w) => $body,
            Window::Year($w) => $body,
            Window::Custom($w) => $body,
        }
    };
}

macro_rules! dispatch_rewrap {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            Window::Week($w) => Window::Week($body),
            Window::HalfMonth($w) => Window::HalfMonth($body),
            Window::Month($w) => Window::Month($body),
            Window::Quarter($w) => Window::Quarter($body),
            Window::Semester($w) => Window::Semester($body),
            Window::Year($w) => Window::Year($body),
            Window::Custom($w) => Window::Custom($body),
        }
    };
}

impl Window {
    /// Builds the `period` window whose start is pinned to `d`.
    ///
    /// For [`Period::Custom`], which has no canonical boundaries to derive
    /// the other endpoint from, this is the single-day range `[d, d]`.
    pub fn starting_on(period: Period, d: NaiveDate) -> Self {
        match period {
            Period::Week => Window::Week(WeekWindow::starting_on(d)),
            Period::HalfMonth => Window::HalfMonth(HalfMonthWindow::starting_on(d)),
            Period::Month => Window::Month(MonthWindow::starting_on(d)),
            Period::Quarter => Window::Quarter(QuarterWindow::starting_on(d)),
            Period::Semester => Window::Semester(SemesterWindow::starting_on(d)),
            Period::Year => Window::Year(YearWindow::starting_on(d)),
            Period::Custom => Window::Custom(
                CustomWindow::new(d, d).expect("a same-day range is always ordered"),
            ),
        }
    }

    /// Builds the `period` window whose end is pinned to `d`.
    ///
    /// For [`Period::Custom`] this is the single-day range `[d, d]`.
    pub fn ending_on(period: Period, d: NaiveDate) -> Self {
        match period {
            Period::Week => Window::Week(WeekWindow::ending_on(d)),
            Period::HalfMonth => Window::HalfMonth(HalfMonthWindow::ending_on(d)),
            Period::Month => Window::Month(MonthWindow::ending_on(d)),
            Period::Quarter => Window::Quarter(QuarterWindow::ending_on(d)),
            Period::Semester => Window::Semester(SemesterWindow::ending_on(d)),
            Period::Year => Window::Year(YearWindow::ending_on(d)),
            Period::Custom => Window::Custom(
                CustomWindow::new(d, d).expect("a same-day range is always ordered"),
            ),
        }
    }

    /// The window's period kind.
    pub fn period(&self) -> Period {
        match self {
            Window::Week(_) => Period::Week,
            Window::HalfMonth(_) => Period::HalfMonth,
            Window::Month(_) => Period::Month,
            Window::Quarter(_) => Period::Quarter,
            Window::Semester(_) => Period::Semester,
            Window::Year(_) => Period::Year,
            Window::Custom(_) => Period::Custom,
        }
    }

    pub fn start(&self) -> NaiveDate {
        dispatch!(self, w => w.start())
    }

    pub fn end(&self) -> NaiveDate {
        dispatch!(self, w => w.end())
    }

    /// Replaces the start date in place; see the variant methods for the
    /// flag-recomputation rules.
    pub fn set_start(&mut self, d: NaiveDate) {
        dispatch!(self, w => w.set_start(d));
    }

    /// Replaces the end date in place.
    pub fn set_end(&mut self, d: NaiveDate) {
        dispatch!(self, w => w.set_end(d));
    }

    /// Locates the window within its parent unit; see the variant methods
    /// for each numbering.
    pub fn index(&self) -> u32 {
        dispatch!(self, w => w.index())
    }

    /// The window one natural period later.
    pub fn next(&self) -> Self {
        dispatch_rewrap!(self, w => w.next())
    }

    /// The window one natural period earlier.
    pub fn prev(&self) -> Self {
        dispatch_rewrap!(self, w => w.prev())
    }

    /// Advances by an explicit month or year step.
    pub fn next_by(&self, step: Step) -> Self {
        dispatch_rewrap!(self, w => w.next_by(step))
    }

    /// Retreats by an explicit month or year step.
    pub fn prev_by(&self, step: Step) -> Self {
        dispatch_rewrap!(self, w => w.prev_by(step))
    }

    /// Snaps outward to the full canonical period around the anchored
    /// endpoint. Idempotent; identity for custom windows.
    pub fn complete(&self) -> Self {
        dispatch_rewrap!(self, w => w.complete())
    }

    /// Iterates every day from start to end, inclusive. Each call starts a
    /// fresh traversal.
    pub fn days(&self) -> Days {
        Days::between(self.start(), self.end())
    }

    /// Reports whether `other` lies fully inside this window, endpoints
    /// inclusive.
    pub fn contains_window(&self, other: &Window) -> bool {
        other.start() >= self.start() && other.end() <= self.end()
    }

    /// Reports whether the day `d` lies inside this window, endpoints
    /// inclusive.
    pub fn contains_date(&self, d: NaiveDate) -> bool {
        d >= self.start() && d <= self.end()
    }

    /// Reports whether the instant `t` lies between the midnight instants
    /// of the two endpoints.
    ///
    /// The endpoints bound the range as instants, so an afternoon timestamp
    /// on the final day falls outside; use [`Window::contains_date`] for
    /// whole-day queries.
    pub fn contains_instant(&self, t: NaiveDateTime) -> bool {
        let start = self.start().and_time(NaiveTime::MIN);
        let end = self.end().and_time(NaiveTime::MIN);
        t >= start && t <= end
    }

    /// Reports whether `[start, end]` lies fully inside this window.
    /// An inverted range is never contained.
    pub fn contains_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        if end < start {
            return false;
        }
        start >= self.start() && end <= self.end()
    }
}
