//! # broadcast-calendar
//!
//! Conversion between Gregorian calendar dates and the broadcast calendar —
//! the Monday-start, whole-week fiscal calendar used in media and retail
//! reporting.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `bc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! broadcast-calendar = "0.1"
//! ```
//!
//! ```rust
//! use broadcast_calendar::{BroadcastIndex, Date};
//!
//! // 2023-01-01 is a Sunday; its broadcast week started the previous
//! // Monday, which is also where broadcast year 2023 begins.
//! let date = Date::from_ymd(2023, 1, 1)?;
//! let idx = BroadcastIndex::from_date(date);
//! assert_eq!(idx.year_id(), 2023);
//! assert_eq!(idx.week_id(), 1);
//! assert_eq!(idx.year_start(), Date::from_ymd(2022, 12, 26)?);
//! # Ok::<(), broadcast_calendar::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Primitive aliases, error types, and input validators.
pub use bc_core as core;

/// Date, weekday, and broadcast-calendar index types.
pub use bc_calendar as calendar;

// ── Top-level re-exports of the common types ─────────────────────────────────

pub use bc_calendar::{
    adjacent_weeks, quarter_of, resolve, weeks_in_year, Advisory, BroadcastIndex, Date, MonthRow,
    MonthTable, NeighborWeek, Resolution, WeekNeighbors, Weekday,
};
pub use bc_core::{Error, Result};
