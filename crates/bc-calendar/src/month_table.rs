//! Precomputed month-boundary table.
//!
//! An optional lookup cache in front of
//! [`BroadcastIndex::from_date`](crate::index::BroadcastIndex::from_date): a
//! sorted table of broadcast month starts over a three-year window, so a
//! forward month lookup becomes "latest boundary ≤ date" instead of a
//! recomputation.  The table is always reproducible from the algorithm and
//! is never an independent source of truth; [`MonthTable::from_rows`]
//! enforces this when re-hydrating a persisted table.
//!
//! A table is immutable after construction and can be shared freely across
//! threads; replacing an outgrown table means building a new value, never
//! mutating in place.

use crate::date::Date;
use bc_core::errors::{Error, Result};
use bc_core::{validate_month_id, validate_year, MonthId, Year};

/// One broadcast month boundary.
///
/// The persisted form is exactly three columns: `year` (fits 16 bits),
/// `month_id` (1–12), `month_start` (ISO-8601 date).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthRow {
    /// Broadcast year the month belongs to.
    pub year: Year,
    /// Broadcast month, 1–12.
    pub month_id: MonthId,
    /// Monday on which the broadcast month begins.
    pub month_start: Date,
}

/// Sorted table of broadcast month starts, ascending by `month_start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTable {
    rows: Vec<MonthRow>,
}

impl MonthTable {
    /// Build the table covering December of `pivot − 1` through January of
    /// `pivot + 1`.
    ///
    /// # Errors
    /// Fails if `pivot` is outside the validator bounds.
    pub fn spanning(pivot: Year) -> Result<Self> {
        validate_year(pivot)?;
        let mut rows = Vec::with_capacity(14);
        rows.push(boundary_row(pivot - 1, 12));
        for month_id in 1..=12 {
            rows.push(boundary_row(pivot, month_id));
        }
        rows.push(boundary_row(pivot + 1, 1));
        Ok(MonthTable { rows })
    }

    /// Re-hydrate a persisted table.
    ///
    /// # Errors
    /// Fails if `rows` is empty, not strictly ascending by `month_start`,
    /// or disagrees with the boundary the algorithm computes for any row —
    /// a divergent cache must never answer queries.
    pub fn from_rows(rows: Vec<MonthRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::Date("month table is empty".into()));
        }
        for row in &rows {
            validate_month_id(row.month_id)?;
            let expected = Date::from_ymd(row.year, row.month_id, 1)?.week_start();
            if row.month_start != expected {
                return Err(Error::Date(format!(
                    "month table row {}-{:02} starts {}, computed boundary is {}",
                    row.year, row.month_id, row.month_start, expected
                )));
            }
        }
        if rows.windows(2).any(|w| w[0].month_start >= w[1].month_start) {
            return Err(Error::Date(
                "month table is not ascending by month_start".into(),
            ));
        }
        Ok(MonthTable { rows })
    }

    /// The broadcast `(year, month)` containing `date`: the row with the
    /// greatest `month_start ≤ date`.
    ///
    /// Equivalent to one evaluation of the month-assignment rule, amortized
    /// across many queries against the same table.
    ///
    /// # Errors
    /// Fails with [`Error::TableBounds`] if `date` falls outside the cached
    /// window — callers must rebuild a wider table rather than receive a
    /// wrong answer.
    pub fn lookup(&self, date: Date) -> Result<(Year, MonthId)> {
        let (min, max) = self.window();
        if date < min || date >= max {
            return Err(Error::TableBounds {
                date: date.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        let idx = self.rows.partition_point(|row| row.month_start <= date);
        let row = self.rows[idx - 1];
        Ok((row.year, row.month_id))
    }

    /// The half-open `[min, max)` window of answerable dates.
    pub fn window(&self) -> (Date, Date) {
        (
            self.rows[0].month_start,
            self.rows[self.rows.len() - 1].month_start,
        )
    }

    /// All rows, ascending by `month_start`.
    pub fn rows(&self) -> &[MonthRow] {
        &self.rows
    }
}

fn boundary_row(year: Year, month_id: MonthId) -> MonthRow {
    let month_start = Date::from_ymd(year, month_id, 1)
        .expect("pivot validation keeps boundary years in range")
        .week_start();
    MonthRow {
        year,
        month_id,
        month_start,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
