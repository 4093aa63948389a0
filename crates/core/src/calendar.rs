//! Gregorian calendar arithmetic used by the season engine.
//!
//! Everything here is pure and allocation-free. Weekdays are numbered with
//! Monday = 0 to match the Monday-first calendar grid.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;
use crate::types::Day;

/// `true` for years divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days (28-31) in `month` (1-12) of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CoreError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(CoreError::Validation(format!(
            "Month must be between 1 and 12, got {month}"
        ))),
    }
}

/// Weekday of the first day of `month`, 0 = Monday through 6 = Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> Result<u32, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::InvalidDate(format!("{year:04}-{month:02}-01")))?;
    Ok(first.weekday().num_days_from_monday())
}

/// The calendar day after `year-month-day`, rolling over months and years.
pub fn next_day(year: i32, month: u32, day: u32) -> Result<(i32, u32, u32), CoreError> {
    let current = Day::from_ymd(year, month, day)?;
    let next = current.succ().ok_or_else(|| {
        CoreError::InvalidDate(format!("day after {current} is out of range"))
    })?;
    Ok((next.year(), next.month(), next.day()))
}

/// Parse a strict `YYYY-MM-DD` string.
pub fn parse_day(value: &str) -> Result<Day, CoreError> {
    value.parse()
}

/// Move `date` by `delta` years, clamping Feb 29 to Feb 28 in non-leap years.
///
/// Only February needs clamping: every other month has the same length in
/// every year.
pub fn shift_date_by_years(date: Day, delta: i32) -> Result<Day, CoreError> {
    let target_year = date
        .year()
        .checked_add(delta)
        .ok_or_else(|| CoreError::InvalidDate(format!("{date} shifted by {delta} years")))?;

    let day = if date.month() == 2 && date.day() == 29 && !is_leap_year(target_year) {
        28
    } else {
        date.day()
    };

    Day::from_ymd(target_year, date.month(), day)
}
