//! Reverse-resolution suite: indices → date, precedence rules, and the
//! round trip back through the indexer.

use bc_calendar::resolve::{self, month_range_starts, month_start, week_start, year_start};
use bc_calendar::{weeks_in_year, Advisory, BroadcastIndex, Date, Weekday};
use bc_core::{Error, MAX_YEAR, MIN_YEAR};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Year / week / month starts ───────────────────────────────────────────────

#[test]
fn first_week_of_2023() {
    assert_eq!(
        resolve::resolve(2023, Some(1), None).unwrap().date,
        date(2022, 12, 26)
    );
}

#[test]
fn year_start_is_week_one() {
    for year in [1901u16, 1977, 2023, 2399] {
        let start = year_start(year).unwrap();
        assert_eq!(start.weekday(), Weekday::Monday);
        assert_eq!(start, week_start(year, 1).unwrap());
        let idx = BroadcastIndex::from_date(start);
        assert_eq!(idx.year_id(), year);
        assert_eq!(idx.week_id(), 1);
        assert_eq!(idx.day_of_year_id(), 1);
    }
}

#[test]
fn week_overflow_is_reported_with_the_maximum() {
    let err = resolve::resolve(2023, Some(999), None).unwrap_err();
    assert_eq!(
        err,
        Error::WeekOverflow {
            year_id: 2023,
            week_id: 999,
            max: 53
        }
    );
    // 2022 has only 52 weeks, so week 53 overflows there.
    assert!(week_start(2022, 53).is_err());
    assert!(week_start(2022, 52).is_ok());
}

#[test]
fn month_start_is_the_week_of_the_first() {
    // Feb 1, 2023 is a Wednesday; broadcast February starts the Monday
    // before.
    assert_eq!(month_start(2023, 2).unwrap(), date(2023, 1, 30));
    // Broadcast January 2023 and the year itself begin together.
    assert_eq!(month_start(2023, 1).unwrap(), year_start(2023).unwrap());
}

#[test]
fn month_starts_agree_with_the_indexer() {
    for year in [1950u16, 2023, 2100] {
        for month in 1..=12u8 {
            let start = month_start(year, month).unwrap();
            let idx = BroadcastIndex::from_date(start);
            assert_eq!(
                (idx.year_id(), idx.month_id()),
                (year, month),
                "month start of {year}-{month:02} mis-indexes"
            );
            assert_eq!(idx.month_start(), start);
        }
    }
}

// ─── Argument precedence ──────────────────────────────────────────────────────

#[test]
fn no_arguments_resolves_the_year_start() {
    let res = resolve::resolve(2023, None, None).unwrap();
    assert_eq!(res.date, date(2022, 12, 26));
    assert_eq!(res.advisory, None);
}

#[test]
fn week_takes_precedence_over_month() {
    // Month 7 would resolve to July; week 1 wins and the month is flagged
    // as ignored rather than failing.
    let res = resolve::resolve(2023, Some(1), Some(7)).unwrap();
    assert_eq!(res.date, date(2022, 12, 26));
    assert_eq!(res.advisory, Some(Advisory::MonthIgnored { month_id: 7 }));
}

#[test]
fn month_alone_resolves_without_advisory() {
    let res = resolve::resolve(2023, None, Some(7)).unwrap();
    assert_eq!(res.date, month_start(2023, 7).unwrap());
    assert_eq!(res.advisory, None);
}

// ─── Validation ───────────────────────────────────────────────────────────────

#[test]
fn year_bounds_are_enforced() {
    for year in [0, MIN_YEAR, MAX_YEAR, u16::MAX] {
        assert!(matches!(
            resolve::resolve(year, Some(1), None),
            Err(Error::YearOutOfRange { .. })
        ));
    }
}

#[test]
fn month_bounds_are_enforced() {
    assert_eq!(
        resolve::resolve(2023, None, Some(0)).unwrap_err(),
        Error::InvalidMonth { month_id: 0 }
    );
    assert_eq!(
        resolve::resolve(2023, None, Some(13)).unwrap_err(),
        Error::InvalidMonth { month_id: 13 }
    );
}

// ─── Round trip ───────────────────────────────────────────────────────────────

#[test]
fn every_week_of_every_year_round_trips() {
    for year in 1998u16..=2028 {
        let max = weeks_in_year(year).unwrap();
        for week in 1..=max {
            let start = week_start(year, week).unwrap();
            let idx = BroadcastIndex::from_date(start);
            assert_eq!(idx.year_id(), year, "week {week} of {year}");
            assert_eq!(idx.week_id(), week, "week {week} of {year}");
            assert_eq!(idx.week_start(), start);
        }
    }
}

#[test]
fn round_trip_at_the_validator_edges() {
    for year in [1901u16, 2399] {
        let max = weeks_in_year(year).unwrap();
        for week in [1, max] {
            let start = week_start(year, week).unwrap();
            let idx = BroadcastIndex::from_date(start);
            assert_eq!((idx.year_id(), idx.week_id()), (year, week));
        }
    }
}

// ─── Month ranges ─────────────────────────────────────────────────────────────

#[test]
fn month_range_starts_cover_the_range() {
    let starts = month_range_starts(2023, (1, 12)).unwrap();
    assert_eq!(starts.len(), 12);
    assert_eq!(starts[0], year_start(2023).unwrap());
    for (i, start) in starts.iter().enumerate() {
        assert_eq!(*start, month_start(2023, i as u8 + 1).unwrap());
    }
    // Strictly ascending.
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn month_range_rejects_bad_pairs() {
    assert_eq!(
        month_range_starts(2023, (0, 5)).unwrap_err(),
        Error::MonthRange { first: 0, last: 5 }
    );
    assert_eq!(
        month_range_starts(2023, (9, 3)).unwrap_err(),
        Error::MonthRange { first: 9, last: 3 }
    );
    let single = month_range_starts(2023, (6, 6)).unwrap();
    assert_eq!(single, vec![month_start(2023, 6).unwrap()]);
}
