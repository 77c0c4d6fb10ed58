//! Range and shape checks on raw inputs.
//!
//! These gate the integer arguments of reverse resolution before any date
//! computation runs.  They have no side effects beyond returning a typed
//! failure.

use crate::errors::{Error, Result};
use crate::{MonthId, Year};

/// Exclusive lower bound on broadcast years accepted by the validators.
pub const MIN_YEAR: Year = 1900;

/// Exclusive upper bound on broadcast years accepted by the validators.
pub const MAX_YEAR: Year = 2400;

/// Check that `year` lies strictly between [`MIN_YEAR`] and [`MAX_YEAR`].
///
/// The bounds are exclusive: resolving a broadcast year needs dates up to a
/// week before its own January 1st and a peek at January 1st of the year
/// after it, so the endpoint years of the representable date range are not
/// resolvable themselves.
///
/// # Errors
/// Returns [`Error::YearOutOfRange`] otherwise.
pub fn validate_year(year: Year) -> Result<()> {
    if year <= MIN_YEAR || year >= MAX_YEAR {
        return Err(Error::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    Ok(())
}

/// Check that `month_id` lies in 1–12.
///
/// # Errors
/// Returns [`Error::InvalidMonth`] otherwise.
pub fn validate_month_id(month_id: MonthId) -> Result<()> {
    if !(1..=12).contains(&month_id) {
        return Err(Error::InvalidMonth { month_id });
    }
    Ok(())
}

/// Check that both elements of a month-range pair lie in 1–12.
///
/// Ordering is not checked here: `(11, 2)` passes.  Callers that need an
/// ascending range compose this with their own ordering check.
///
/// # Errors
/// Returns [`Error::MonthRange`] otherwise.
pub fn validate_month_range(range: (MonthId, MonthId)) -> Result<()> {
    let (first, last) = range;
    if !(1..=12).contains(&first) || !(1..=12).contains(&last) {
        return Err(Error::MonthRange { first, last });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_in_range() {
        assert!(validate_year(1901).is_ok());
        assert!(validate_year(2023).is_ok());
        assert!(validate_year(2399).is_ok());
    }

    #[test]
    fn year_bounds_are_exclusive() {
        assert_eq!(
            validate_year(MIN_YEAR),
            Err(Error::YearOutOfRange {
                year: MIN_YEAR,
                min: MIN_YEAR,
                max: MAX_YEAR
            })
        );
        assert!(validate_year(MAX_YEAR).is_err());
        assert!(validate_year(1850).is_err());
        assert!(validate_year(3000).is_err());
    }

    #[test]
    fn month_id_range() {
        for m in 1..=12 {
            assert!(validate_month_id(m).is_ok());
        }
        assert_eq!(
            validate_month_id(0),
            Err(Error::InvalidMonth { month_id: 0 })
        );
        assert_eq!(
            validate_month_id(13),
            Err(Error::InvalidMonth { month_id: 13 })
        );
    }

    #[test]
    fn month_range_elements() {
        assert!(validate_month_range((1, 12)).is_ok());
        assert!(validate_month_range((6, 6)).is_ok());
        // Ordering is deliberately not enforced.
        assert!(validate_month_range((11, 2)).is_ok());

        assert_eq!(
            validate_month_range((0, 5)),
            Err(Error::MonthRange { first: 0, last: 5 })
        );
        assert_eq!(
            validate_month_range((3, 13)),
            Err(Error::MonthRange { first: 3, last: 13 })
        );
    }
}
