//! # bc-calendar
//!
//! Date, weekday, and broadcast-calendar index types.
//!
//! The broadcast calendar is the Monday-start, whole-week fiscal calendar
//! used in media and retail reporting.  This crate converts calendar dates
//! to broadcast year/quarter/month/week/day indices and back, derives the
//! adjacent broadcast weeks of a date, and offers a precomputed
//! month-boundary table as a lookup cache.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Previous/next broadcast-week lookup.
pub mod adjacency;

/// `Date` type.
pub mod date;

/// `BroadcastIndex` — date → broadcast indices.
pub mod index;

/// Precomputed month-boundary lookup table.
pub mod month_table;

/// Reverse resolution — broadcast indices → date.
pub mod resolve;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use adjacency::{adjacent_weeks, NeighborWeek, WeekNeighbors};
pub use date::Date;
pub use index::{quarter_of, weeks_in_year, BroadcastIndex};
pub use month_table::{MonthRow, MonthTable};
pub use resolve::{resolve, Advisory, Resolution};
pub use weekday::Weekday;
