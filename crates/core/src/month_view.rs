//! Monday-first month grid and day ownership lookup for calendar views.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::calendar::{days_in_month, first_weekday_of_month};
use crate::error::CoreError;
use crate::partition::expand_all;
use crate::types::{Day, SeasonCollection, SeasonId};

/// One rendered day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: Day,
    /// Owning season, if any.
    pub season_id: Option<SeasonId>,
}

/// One month of a Monday-first calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Empty cells before the 1st (0 when the month starts on a Monday).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

/// Map every assigned day to its season.
///
/// Stored ranges go through the codec, so reversed or oversized ranges fail
/// here exactly as they do in coverage. When out-of-band data breaks the
/// partition rule, the first season in id order keeps a contested day, as in
/// [`crate::partition::season_for_day`].
pub fn day_assignments(
    seasons: &SeasonCollection,
) -> Result<BTreeMap<Day, SeasonId>, CoreError> {
    let mut owners = BTreeMap::new();
    for (id, days) in expand_all(seasons)? {
        for day in days {
            owners.entry(day).or_insert_with(|| id.clone());
        }
    }
    Ok(owners)
}

/// Build the grid for `month` of `year`, tagging each day with its owner.
pub fn month_grid(
    year: i32,
    month: u32,
    seasons: &SeasonCollection,
) -> Result<MonthGrid, CoreError> {
    let length = days_in_month(year, month)?;
    let leading_blanks = first_weekday_of_month(year, month)?;
    let owners = day_assignments(seasons)?;

    let days = (1..=length)
        .map(|d| {
            let day = Day::from_ymd(year, month, d)?;
            Ok(DayCell {
                day,
                season_id: owners.get(&day).cloned(),
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(MonthGrid {
        year,
        month,
        leading_blanks,
        days,
    })
}
