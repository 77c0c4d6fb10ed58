//! Reverse resolution: broadcast indices back to calendar dates.
//!
//! The inverse of [`BroadcastIndex::from_date`](crate::index::BroadcastIndex::from_date)
//! at year, week, or month granularity.  Day-level inversion is a trivial
//! offset from the year start and is not a separate operation.

use crate::date::Date;
use crate::index::weeks_in_year;
use bc_core::errors::{Error, Result};
use bc_core::{validate_month_id, validate_month_range, validate_year, MonthId, WeekId, Year};

/// Non-fatal notice attached to a [`Resolution`].
///
/// Never escalated to a failure; suppression is the caller ignoring the
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// Both `week_id` and `month_id` were supplied; `week_id` took
    /// precedence and the month was ignored.
    MonthIgnored {
        /// The ignored month.
        month_id: MonthId,
    },
}

/// Outcome of a reverse resolution: the date, plus any advisory raised
/// while resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved date (always a Monday).
    pub date: Date,
    /// Advisory notice, if the argument combination warranted one.
    pub advisory: Option<Advisory>,
}

/// First day (Monday) of a broadcast year.
///
/// # Errors
/// Fails if `year_id` is outside the validator bounds.
pub fn year_start(year_id: Year) -> Result<Date> {
    validate_year(year_id)?;
    Ok(Date::from_ymd(year_id, 1, 1)
        .expect("validated year")
        .week_start())
}

/// First day (Monday) of a broadcast week.
///
/// # Errors
/// Fails with [`Error::WeekOverflow`] if `week_id` is 0 or exceeds the
/// year's actual week count, or with a year-bounds error from
/// [`year_start`].
pub fn week_start(year_id: Year, week_id: WeekId) -> Result<Date> {
    let start = year_start(year_id)?;
    let max = weeks_in_year(year_id)?;
    if week_id == 0 || week_id > max {
        return Err(Error::WeekOverflow {
            year_id,
            week_id,
            max,
        });
    }
    Ok(start + (week_id as i32 - 1) * 7)
}

/// First day (Monday) of a broadcast month: the week start of the first of
/// the Gregorian month.
///
/// # Errors
/// Fails if `year_id` or `month_id` is outside the validator bounds.
pub fn month_start(year_id: Year, month_id: MonthId) -> Result<Date> {
    validate_year(year_id)?;
    validate_month_id(month_id)?;
    Ok(Date::from_ymd(year_id, month_id, 1)
        .expect("validated year and month")
        .week_start())
}

/// Resolve broadcast indices to a date.
///
/// * Neither `week_id` nor `month_id`: the broadcast year start.
/// * `week_id` supplied: the week's start; if `month_id` was also supplied
///   it is ignored and the result carries [`Advisory::MonthIgnored`].
/// * Only `month_id` supplied: the month's start.
///
/// # Errors
/// Year-bounds, month-range, and [`Error::WeekOverflow`] failures from the
/// operations above.
pub fn resolve(
    year_id: Year,
    week_id: Option<WeekId>,
    month_id: Option<MonthId>,
) -> Result<Resolution> {
    validate_year(year_id)?;
    match (week_id, month_id) {
        (None, None) => Ok(Resolution {
            date: year_start(year_id)?,
            advisory: None,
        }),
        (Some(week), ignored) => Ok(Resolution {
            date: week_start(year_id, week)?,
            advisory: ignored.map(|month_id| Advisory::MonthIgnored { month_id }),
        }),
        (None, Some(month)) => Ok(Resolution {
            date: month_start(year_id, month)?,
            advisory: None,
        }),
    }
}

/// Month starts for an inclusive, ascending month range of one broadcast
/// year.
///
/// # Errors
/// Fails with [`Error::MonthRange`] if either element is outside 1–12 or
/// the pair is descending, or with a year-bounds error.
pub fn month_range_starts(year_id: Year, range: (MonthId, MonthId)) -> Result<Vec<Date>> {
    validate_year(year_id)?;
    validate_month_range(range)?;
    let (first, last) = range;
    if first > last {
        return Err(Error::MonthRange { first, last });
    }
    (first..=last).map(|m| month_start(year_id, m)).collect()
}
