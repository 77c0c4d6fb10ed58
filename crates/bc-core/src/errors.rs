//! Error types for the broadcast-calendar workspace.
//!
//! All fallible operations across the workspace return the single
//! `thiserror`-derived [`Error`] enum defined here.  Every variant carries
//! the offending value(s) so callers can report both the input and the
//! limit it violated.

use crate::{MonthId, WeekId, Year};
use thiserror::Error;

/// The top-level error type used throughout the broadcast-calendar crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year outside the supported (exclusive) bounds.
    #[error("year {year} outside supported range ({min}, {max})")]
    YearOutOfRange {
        /// The year that was rejected.
        year: Year,
        /// Lower exclusive bound.
        min: Year,
        /// Upper exclusive bound.
        max: Year,
    },

    /// A month number outside 1–12.
    #[error("invalid month: {month_id} (must be 1..=12)")]
    InvalidMonth {
        /// The month number that was rejected.
        month_id: MonthId,
    },

    /// A malformed month-range pair: an element outside 1–12, or a
    /// descending pair where the caller required an ascending one.
    #[error("invalid month range ({first}, {last}): both months must be 1..=12")]
    MonthRange {
        /// First element of the pair.
        first: MonthId,
        /// Last element of the pair.
        last: MonthId,
    },

    /// A week number outside the broadcast year's actual week count.
    #[error("week {week_id} outside broadcast year {year_id} (has {max} weeks)")]
    WeekOverflow {
        /// The broadcast year that was queried.
        year_id: Year,
        /// The week number that was rejected.
        week_id: WeekId,
        /// The number of weeks in that broadcast year (52 or 53).
        max: WeekId,
    },

    /// A date outside the window covered by a cached month table.
    ///
    /// Dates are rendered in ISO-8601 form; the window is half-open,
    /// `[min, max)`.
    #[error("date {date} outside the cached month table window [{min}, {max})")]
    TableBounds {
        /// The queried date.
        date: String,
        /// Inclusive lower bound of the cached window.
        min: String,
        /// Exclusive upper bound of the cached window.
        max: String,
    },

    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout the broadcast-calendar crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;
