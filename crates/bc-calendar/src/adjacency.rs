//! Previous/next broadcast-week lookup.
//!
//! "Same weekday, one broadcast week earlier/later" is a first-class query
//! in broadcast reporting.  It is pure composition: index the dates seven
//! days on either side of the input and project the week-level fields.

use crate::date::Date;
use crate::index::BroadcastIndex;
use bc_core::errors::Result;
use bc_core::{QuarterId, WeekId, Year};

/// Week-level projection of a [`BroadcastIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborWeek {
    /// Broadcast year of the neighboring week.
    pub year_id: Year,
    /// Broadcast quarter of the neighboring week.
    pub quarter_id: QuarterId,
    /// Broadcast week number of the neighboring week.
    pub week_id: WeekId,
}

impl From<&BroadcastIndex> for NeighborWeek {
    fn from(idx: &BroadcastIndex) -> Self {
        NeighborWeek {
            year_id: idx.year_id(),
            quarter_id: idx.quarter_id(),
            week_id: idx.week_id(),
        }
    }
}

/// The broadcast weeks adjacent to a date's own week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekNeighbors {
    /// The week seven days before the date.
    pub prev: NeighborWeek,
    /// The week seven days after the date.
    pub next: NeighborWeek,
}

/// Compute the previous and next broadcast weeks for `date`.
///
/// # Errors
/// Fails only when `date ± 7` leaves the representable date range, i.e. in
/// the first or last week of it.
pub fn adjacent_weeks(date: Date) -> Result<WeekNeighbors> {
    let prev = BroadcastIndex::from_date(date.add_days(-7)?);
    let next = BroadcastIndex::from_date(date.add_days(7)?);
    Ok(WeekNeighbors {
        prev: NeighborWeek::from(&prev),
        next: NeighborWeek::from(&next),
    })
}
