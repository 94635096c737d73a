//! # timespan
//!
//! Calendar windows: date ranges aligned to calendar periods, with
//! navigation that remembers boundary intent.
//!
//! A window is an inclusive `[start, end]` date range tied to one of seven
//! period kinds. Moving a window forward or backward keeps the anchored
//! endpoint's meaning: a month window ending on Jan 31 ends on Feb 28 after
//! one step, and on Mar 31 after two, because "last day of the month" is an
//! intent, not a day number.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Window::starting_on / ending_on"| B["Window"]
//!     B -->|".next() / .prev()"| B
//!     B -->|".next_by(Step) / .prev_by(Step)"| B
//!     B -->|".complete()"| B
//!     B -->|".days()"| C["Days iterator"]
//!     B -->|".contains_date() / .contains_window()"| D["bool"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use timespan::{Period, Step, Window};
//!
//! let jan = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
//! let w = Window::ending_on(Period::Month, jan);
//!
//! // The last-day intent survives the short month.
//! let feb = w.next();
//! assert_eq!(feb.end(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
//! let mar = feb.next();
//! assert_eq!(mar.end(), NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
//!
//! // Jump a whole year in one step.
//! let next_year = w.next_by(Step::Year);
//! assert_eq!(next_year.end(), NaiveDate::from_ymd_opt(2027, 1, 31).unwrap());
//!
//! // Walk the days.
//! for day in mar.days() {
//!     println!("{day}");
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `window` | The `Window` enum, `Period` and `Step` kinds, containment |
//! | `week` | Fixed four-bucket weeks within a month |
//! | `half_month` | First and second halves of a month |
//! | `month` | Calendar months |
//! | `quarter` | Calendar quarters |
//! | `semester` | Calendar half-years |
//! | `year` | Calendar years |
//! | `custom` | Arbitrary explicit ranges with exact-duration steps |
//! | `days` | Inclusive day iterator |
//! | `boundary` | Period boundary lookups on plain dates |
//! | `date` | Clamped month arithmetic and last-day helpers |
//! | `error` | Error types |

mod boundary;
mod custom;
mod date;
mod days;
mod error;
mod half_month;
mod month;
mod quarter;
mod semester;
mod span;
mod week;
mod window;
mod year;

pub use boundary::{
    half_month_end, half_month_start, is_half_month_end, is_quarter_end, is_semester_end,
    is_week_end, month_end, month_start, quarter_end, quarter_start, semester_end, semester_start,
    week_end, week_index, week_start, year_end, year_start,
};
pub use custom::CustomWindow;
pub use date::{
    is_last_day_of_month, month_length, shift_month_clamp, snap_to_last_day_of_month,
    truncate_to_day,
};
pub use days::Days;
pub use error::WindowError;
pub use half_month::HalfMonthWindow;
pub use month::MonthWindow;
pub use quarter::QuarterWindow;
pub use semester::SemesterWindow;
pub use week::WeekWindow;
pub use window::{Period, Step, Window};
pub use year::YearWindow;
