//! `BroadcastIndex` — forward conversion from a calendar date to its
//! broadcast-calendar indices.
//!
//! The broadcast calendar is built from whole Monday-start weeks.  A week's
//! month and year are decided by the **month-assignment rule**: among the
//! seven dates of the week, the one with the smallest day-of-month fixes the
//! week's `(year_id, month_id)`.  Within any week at most one date can fall
//! just after a month rollover, so the minimum selects that date when a
//! rollover occurs and otherwise reflects the week's uniform month.

use crate::date::Date;
use crate::weekday::Weekday;
use bc_core::errors::Result;
use bc_core::{validate_year, DayOfYear, MonthId, QuarterId, WeekId, Year};

/// The broadcast-calendar indices of a single date.
///
/// Produced only by [`BroadcastIndex::from_date`]; every field is computed
/// before the value is returned and nothing is settable afterwards.
///
/// Invariants: `month_id` ∈ 1–12, `quarter_id` is a pure function of
/// `month_id`, `week_start` and `year_start` are always Mondays,
/// `week_start ≤ date ≤ week_start + 6`, and `year_start ≤ week_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BroadcastIndex {
    year_id: Year,
    quarter_id: QuarterId,
    month_id: MonthId,
    week_id: WeekId,
    day_of_year_id: DayOfYear,
    weekday: Weekday,
    week_start: Date,
    year_start: Date,
    month_start: Date,
}

impl BroadcastIndex {
    /// Compute the broadcast indices for `date`.
    ///
    /// Total for every representable [`Date`]; there is no failure case.
    pub fn from_date(date: Date) -> Self {
        let week_start = date.week_start();
        let (year_id, month_id) = week_year_month(week_start);

        // The broadcast year begins on the Monday of the week containing
        // January 1 of `year_id`.
        let year_start = Date::from_ymd(year_id, 1, 1)
            .expect("week month-assignment stays within the date range")
            .week_start();
        let month_start = Date::from_ymd(year_id, month_id, 1)
            .expect("week month-assignment stays within the date range")
            .week_start();

        let week_id = ((week_start - year_start) / 7 + 1) as WeekId;
        let day_of_year_id = (date - year_start + 1) as DayOfYear;

        BroadcastIndex {
            year_id,
            quarter_id: quarter_of(month_id),
            month_id,
            week_id,
            day_of_year_id,
            weekday: date.weekday(),
            week_start,
            year_start,
            month_start,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Broadcast year.
    pub fn year_id(&self) -> Year {
        self.year_id
    }

    /// Broadcast quarter, 1–4.
    pub fn quarter_id(&self) -> QuarterId {
        self.quarter_id
    }

    /// Broadcast month, 1–12.
    pub fn month_id(&self) -> MonthId {
        self.month_id
    }

    /// Broadcast week within the year, 1–53.
    pub fn week_id(&self) -> WeekId {
        self.week_id
    }

    /// 1-based day offset from the broadcast year start, 1–371.
    pub fn day_of_year_id(&self) -> DayOfYear {
        self.day_of_year_id
    }

    /// Weekday of the source date (ordinal 1 = Monday … 7 = Sunday).
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Monday beginning the broadcast week.
    pub fn week_start(&self) -> Date {
        self.week_start
    }

    /// Monday beginning the broadcast year.
    pub fn year_start(&self) -> Date {
        self.year_start
    }

    /// Monday beginning the broadcast month.
    pub fn month_start(&self) -> Date {
        self.month_start
    }
}

/// Number of weeks (52 or 53) in a broadcast year.
///
/// Computed as the week index of the last day before the next broadcast
/// year's start.
///
/// # Errors
/// Returns [`bc_core::Error::YearOutOfRange`] if `year_id` fails
/// [`validate_year`].
pub fn weeks_in_year(year_id: Year) -> Result<WeekId> {
    validate_year(year_id)?;
    let next_year_start = Date::from_ymd(year_id + 1, 1, 1)
        .expect("validated year")
        .week_start();
    let last_day = next_year_start - 1;
    Ok(BroadcastIndex::from_date(last_day).week_id())
}

/// Broadcast quarter for a month, 1–4.
///
/// Pure function of the month alone: {1,2,3} → Q1, {4,5,6} → Q2,
/// {7,8,9} → Q3, {10,11,12} → Q4.
pub fn quarter_of(month_id: MonthId) -> QuarterId {
    debug_assert!((1..=12).contains(&month_id));
    (month_id - 1) / 3 + 1
}

/// Apply the month-assignment rule to a week.
///
/// `week_start` must be a Monday.  The seven dates of the week, ordered by
/// day-of-month, start with the date just after a month rollover if one
/// occurs inside the week; its `(year, month)` is the week's broadcast
/// `(year_id, month_id)`.
fn week_year_month(week_start: Date) -> (Year, MonthId) {
    debug_assert_eq!(week_start.weekday(), Weekday::Monday);
    // The date range opens on a Monday and closes on a Sunday, so the full
    // week of any representable date is itself representable.
    let week: [Date; 7] =
        std::array::from_fn(|i| Date::from_serial_unchecked(week_start.serial() + i as i32));
    let min_month_day = week
        .iter()
        .min_by_key(|d| d.day_of_month())
        .expect("week array is non-empty");
    (min_month_day.year(), min_month_day.month())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
