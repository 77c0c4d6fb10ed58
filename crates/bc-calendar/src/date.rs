//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch chosen
//! for the broadcast calendar: serial 1 is **January 1, 1900**, a Monday.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid range is 1900-01-01 to 2400-12-31.
//!
//! Both endpoints fall on broadcast-week boundaries — the range opens on a
//! Monday and closes on a Sunday — so enumerating the week around any valid
//! date never leaves the range.

use crate::weekday::Weekday;
use bc_core::errors::{Error, Result};
use bc_core::{MAX_YEAR, MIN_YEAR};

/// A proleptic-Gregorian calendar date represented as a serial number.
///
/// No time-of-day or timezone component; values are immutable.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900 (a Monday).
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2400 (a Sunday).
    pub const MAX: Date = Date(182_987);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// # Errors
    /// Returns an error if `serial` is not positive or exceeds [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// # Errors
    /// Returns an error if any component is outside its valid range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from an (unchecked) serial number.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            serial > 0 && Date(serial) <= Self::MAX,
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the Gregorian year (1900–2400).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the Gregorian month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Epoch Jan 1, 1900 is a Monday: serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return the Monday on or before this date — the first day of the
    /// broadcast week containing it.
    pub fn week_start(&self) -> Date {
        // weekday ordinal is 1-based, so this never drops below serial 1.
        Date::from_serial_unchecked(self.0 - (self.weekday().ordinal() as i32 - 1))
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` moves backward).
    ///
    /// # Errors
    /// Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    /// ISO-8601 (`YYYY-MM-DD`) rendering.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, '-');
        let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d)) => (y, m, d),
            _ => return Err(Error::Date(format!("malformed ISO date {s:?}"))),
        };
        let parse = |field: &str| -> Result<u16> {
            field
                .parse::<u16>()
                .map_err(|_| Error::Date(format!("malformed ISO date {s:?}")))
        };
        let (y, m, d) = (parse(y)?, parse(m)?, parse(d)?);
        if m > 12 || d > 31 {
            return Err(Error::Date(format!("malformed ISO date {s:?}")));
        }
        Date::from_ymd(y, m as u8, d as u8)
    }
}

// ── Serde (ISO-8601 strings) ──────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap days in [1900, year); 1900 itself is not a leap year.
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    // Days in months 1..m for the current year
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    // Days in the current month
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year
    let mut y = (serial / 365 + 1900) as u16;
    // Adjust until serial falls within the year
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let start_of_year = serial_from_ymd(y, 1, 1);
    let doy = serial - start_of_year + 1; // 1-based
                                          // Find month
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_max() {
        let d = Date::from_ymd(2400, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
        assert_eq!(d.weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 6, 15),
            (2400, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2023-01-01 is a Sunday
        let d2 = Date::from_ymd(2023, 1, 1).unwrap();
        assert_eq!(d2.weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_week_start() {
        // Sunday 2023-01-01 → Monday 2022-12-26
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        assert_eq!(d.week_start(), Date::from_ymd(2022, 12, 26).unwrap());
        // A Monday is its own week start
        let mon = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(mon.week_start(), mon);
        // The epoch's week start never underflows
        assert_eq!(Date::MIN.week_start(), Date::MIN);
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2, Date::from_ymd(2023, 2, 1).unwrap());
        assert_eq!(d2 - d, 31);
        assert_eq!(d.days_between(d2), 31);
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_iso_display_and_parse() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        assert_eq!(d.to_string(), "2023-01-01");
        assert_eq!("2023-01-01".parse::<Date>().unwrap(), d);
        assert_eq!("2400-12-31".parse::<Date>().unwrap(), Date::MAX);

        assert!("2023-13-01".parse::<Date>().is_err());
        assert!("2023-02-30".parse::<Date>().is_err());
        assert!("not-a-date".parse::<Date>().is_err());
        assert!("20230101".parse::<Date>().is_err());
    }

    #[test]
    fn test_from_serial_range() {
        assert!(Date::from_serial(0).is_err());
        assert!(Date::from_serial(-5).is_err());
        assert_eq!(Date::from_serial(1).unwrap(), Date::MIN);
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_iso_roundtrip() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2023-01-01\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
