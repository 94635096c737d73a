//! Error types for the timespan crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the timespan crate.
///
/// Window navigation itself is total; the only failure points are
/// constructing an explicit custom range whose end precedes its start,
/// and parsing period or step names from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Returned when an explicit range is constructed with `end < start`.
    #[error("window end {end} precedes start {start}")]
    InvertedRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date, which precedes `start`.
        end: NaiveDate,
    },

    /// Returned when a period name does not match any known period.
    #[error("unknown period {name:?}")]
    UnknownPeriod {
        /// The unrecognized period name.
        name: String,
    },

    /// Returned when a step name does not match any known step.
    #[error("unknown step {name:?}")]
    UnknownStep {
        /// The unrecognized step name.
        name: String,
    },
}
