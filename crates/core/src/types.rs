//! Shared value types for the seasonal calendar engine.
//!
//! Dates cross every boundary as `YYYY-MM-DD` strings; inside the engine
//! they are [`Day`] values backed by [`chrono::NaiveDate`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Season ids are `"{year}-{slug}"` strings fixed at creation time.
pub type SeasonId = String;

/// One `(scope, year)` worth of seasons, keyed by id.
///
/// Ordered so iteration, serialization and diffs are deterministic.
pub type SeasonCollection = BTreeMap<SeasonId, Season>;

/// Engine-internal dense representation of a set of days. Never persisted.
pub type DaySet = BTreeSet<Day>;

/// Smallest year representable as a four-digit `YYYY` string.
pub const MIN_YEAR: i32 = 1;

/// Largest year representable as a four-digit `YYYY` string.
pub const MAX_YEAR: i32 = 9999;

// ---------------------------------------------------------------------------
// Day
// ---------------------------------------------------------------------------

/// A timezone-free calendar day.
///
/// Always within [`MIN_YEAR`]..=[`MAX_YEAR`] so its canonical string form is
/// fixed width and sorts the same way the dates do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Day(NaiveDate);

impl Day {
    /// Build a day from its components, rejecting non-existent dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CoreError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CoreError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Day)
            .ok_or_else(|| CoreError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Wrap a chrono date, rejecting years outside the four-digit range.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CoreError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            Ok(Day(date))
        } else {
            Err(CoreError::InvalidDate(date.to_string()))
        }
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// The following calendar day, or `None` past `9999-12-31`.
    pub fn succ(self) -> Option<Day> {
        self.0.succ_opt().filter(|d| d.year() <= MAX_YEAR).map(Day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Day {
    type Err = CoreError;

    /// Strict `YYYY-MM-DD` parser. No trimming, no single-digit fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidDate(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_ok {
            return Err(invalid());
        }

        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..7].parse().map_err(|_| invalid())?;
        let day: u32 = s[8..10].parse().map_err(|_| invalid())?;

        Day::from_ymd(year, month, day).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Day {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.to_string()
    }
}

// ---------------------------------------------------------------------------
// DateRange
// ---------------------------------------------------------------------------

/// An inclusive `start..=end` span of days.
///
/// Deserialization does not check `start <= end`; corrupt persisted ranges
/// are rejected when they are expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Day,
    pub end: Day,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: Day, end: Day) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse both bounds from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, CoreError> {
        Self::new(start.parse()?, end.parse()?)
    }

    /// A range covering exactly one day.
    pub fn single(day: Day) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, day: Day) -> bool {
        self.start <= day && day <= self.end
    }
}

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// A named, colored annual period used to override pricing and minimum stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: SeasonId,
    pub year: i32,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub date_ranges: Vec<DateRange>,
}
