//! Rollover-safe date construction.
//!
//! `chrono` rejects out-of-range components, but month navigation relies on
//! them: day 0 is the last day of the previous month, month 13 is January of
//! the following year. Everything here normalizes instead of failing.
use chrono::{Datelike, Duration, NaiveDate};

/// Builds a date from components that may lie outside their usual ranges.
///
/// The month carries into the year first, then `day` is applied as an offset
/// from the 1st of that month, so `(2016, 6, 0)` is 2016-05-31 and
/// `(2016, 13, 1)` is 2017-01-01. Results beyond what `NaiveDate` can
/// represent saturate to `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn normalize(year: i32, month: i32, day: i32) -> NaiveDate {
    let month0 = i64::from(month) - 1;
    let year   = i64::from(year) + month0.div_euclid(12);
    let month  = (month0.rem_euclid(12) + 1) as u32;

    let first = i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month, 1));
    let Some(first) = first else {
        return if year < 0 { NaiveDate::MIN } else { NaiveDate::MAX };
    };

    let offset = i64::from(day) - 1;
    first
        .checked_add_signed(Duration::days(offset))
        .unwrap_or(if offset < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Number of days in `month` (1-based) of `year`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // Day 0 of the following month is the last day of this one.
    let month = i32::try_from(month).unwrap_or(i32::MAX);
    normalize(year, month.saturating_add(1), 0).day()
}
