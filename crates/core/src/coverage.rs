//! Per-season and unassigned day counts for one year.

use serde::Serialize;

use crate::calendar::days_in_year;
use crate::error::CoreError;
use crate::partition::expand_all;
use crate::types::{SeasonCollection, SeasonId};

/// Day count for a single season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonCoverage {
    pub season_id: SeasonId,
    pub name: String,
    pub color: String,
    pub days: u32,
}

/// Coverage summary for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub year: i32,
    pub total_days: u32,
    pub seasons: Vec<SeasonCoverage>,
    /// Days no season owns. Never negative.
    pub unassigned: u32,
    /// How far the season counts exceed the year. Non-zero only when seasons
    /// overlap, which means the collection needs an integrity check.
    pub over_assigned_days: u32,
}

impl CoverageReport {
    /// Sum of every season's day count.
    pub fn assigned(&self) -> u32 {
        self.seasons.iter().map(|s| s.days).sum()
    }

    pub fn has_integrity_warning(&self) -> bool {
        self.over_assigned_days > 0
    }
}

/// Count the days each season of `year` owns and how many remain unassigned.
///
/// Seasons of other years are skipped, as are days outside `year`. Counts
/// are summed rather than unioned; the partition rule makes that exact.
pub fn coverage(year: i32, seasons: &SeasonCollection) -> Result<CoverageReport, CoreError> {
    let total_days = days_in_year(year);

    let mut per_season = Vec::new();
    for (id, days) in expand_all(seasons)? {
        let season = &seasons[id];
        if season.year != year {
            continue;
        }
        let in_year = days.iter().filter(|day| day.year() == year).count() as u32;
        per_season.push(SeasonCoverage {
            season_id: id.clone(),
            name: season.name.clone(),
            color: season.color.clone(),
            days: in_year,
        });
    }

    let assigned: u32 = per_season.iter().map(|s| s.days).sum();

    Ok(CoverageReport {
        year,
        total_days,
        seasons: per_season,
        unassigned: total_days.saturating_sub(assigned),
        over_assigned_days: assigned.saturating_sub(total_days),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::{paint_range, remove_day_in};
    use crate::types::{DateRange, Day, Season};

    fn day(s: &str) -> Day {
        s.parse().unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    fn season(id: &str, year: i32, ranges: Vec<DateRange>) -> Season {
        Season {
            id: id.into(),
            year,
            name: id.into(),
            color: "#000000".into(),
            date_ranges: ranges,
        }
    }

    fn collection(seasons: Vec<Season>) -> SeasonCollection {
        seasons.into_iter().map(|s| (s.id.clone(), s)).collect()
    }

    #[test]
    fn empty_collection_is_fully_unassigned() {
        let report = coverage(2026, &SeasonCollection::new()).unwrap();
        assert_eq!(report.total_days, 365);
        assert_eq!(report.unassigned, 365);
        assert!(report.seasons.is_empty());
    }

    #[test]
    fn leap_year_has_366_days() {
        let seasons = collection(vec![season("a", 2024, vec![range("2024-02-01", "2024-02-29")])]);
        let report = coverage(2024, &seasons).unwrap();
        assert_eq!(report.total_days, 366);
        assert_eq!(report.seasons[0].days, 29);
        assert_eq!(report.unassigned, 337);
    }

    #[test]
    fn conservation_after_paint_and_remove() {
        let mut seasons = collection(vec![season("a", 2026, vec![]), season("b", 2026, vec![])]);
        seasons = paint_range(&seasons, "a", day("2026-01-01"), day("2026-06-30")).unwrap();
        seasons = paint_range(&seasons, "b", day("2026-06-01"), day("2026-12-31")).unwrap();
        seasons = remove_day_in(&seasons, "b", day("2026-09-09")).unwrap();

        let report = coverage(2026, &seasons).unwrap();

        assert_eq!(report.assigned() + report.unassigned, report.total_days);
        assert_eq!(report.unassigned, 1);
        assert!(!report.has_integrity_warning());
    }

    #[test]
    fn overlapping_out_of_band_data_clamps_and_warns() {
        let seasons = collection(vec![
            season("a", 2026, vec![range("2026-01-01", "2026-12-31")]),
            season("b", 2026, vec![range("2026-12-01", "2026-12-31")]),
        ]);

        let report = coverage(2026, &seasons).unwrap();

        assert_eq!(report.unassigned, 0);
        assert_eq!(report.over_assigned_days, 31);
        assert!(report.has_integrity_warning());
    }

    #[test]
    fn other_years_are_not_counted() {
        let seasons = collection(vec![
            season("2025-a", 2025, vec![range("2025-01-01", "2025-01-31")]),
            season("2026-a", 2026, vec![range("2025-12-25", "2026-01-05")]),
        ]);

        let report = coverage(2026, &seasons).unwrap();

        assert_eq!(report.seasons.len(), 1);
        assert_eq!(report.seasons[0].days, 5);
    }
}
