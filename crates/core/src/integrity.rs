//! Explicit integrity check for season collections.
//!
//! Painting keeps collections consistent going forward, but nothing repairs
//! data that arrives broken (manual edits, imports). This pass reports the
//! problems; it never fixes them.

use serde::Serialize;

use crate::codec::{collapse, expand, is_canonical};
use crate::error::CoreError;
use crate::types::{DateRange, DaySet, SeasonCollection, SeasonId};

/// Two seasons of the same year claiming the same days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub first: SeasonId,
    pub second: SeasonId,
    /// The shared days, in canonical range form.
    pub days: Vec<DateRange>,
}

/// A single season whose stored ranges are malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeasonIssue {
    /// Ranges cannot be expanded at all (reversed or too long).
    InvalidRanges { season_id: SeasonId, error: String },
    /// Ranges are valid but unsorted, overlapping or adjacent.
    NotCanonical { season_id: SeasonId },
    /// Ranges include days outside the season's year.
    OutsideYear {
        season_id: SeasonId,
        year: i32,
        days: Vec<DateRange>,
    },
    /// The id does not start with `"{year}-"`.
    IdYearMismatch { season_id: SeasonId, year: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub overlaps: Vec<Overlap>,
    pub issues: Vec<SeasonIssue>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty() && self.issues.is_empty()
    }
}

/// Check every season and every same-year pair of seasons.
pub fn check(seasons: &SeasonCollection) -> IntegrityReport {
    let mut report = IntegrityReport::default();
    let mut expanded = Vec::new();

    for (id, season) in seasons {
        if !id.starts_with(&format!("{}-", season.year)) {
            report.issues.push(SeasonIssue::IdYearMismatch {
                season_id: id.clone(),
                year: season.year,
            });
        }

        let days = match expand(&season.date_ranges) {
            Ok(days) => days,
            Err(err) => {
                report.issues.push(SeasonIssue::InvalidRanges {
                    season_id: id.clone(),
                    error: err.to_string(),
                });
                continue;
            }
        };

        if !is_canonical(&season.date_ranges) {
            report.issues.push(SeasonIssue::NotCanonical {
                season_id: id.clone(),
            });
        }

        let outside: DaySet = days
            .iter()
            .filter(|day| day.year() != season.year)
            .copied()
            .collect();
        if !outside.is_empty() {
            report.issues.push(SeasonIssue::OutsideYear {
                season_id: id.clone(),
                year: season.year,
                days: collapse(&outside),
            });
        }

        expanded.push((id, season.year, days));
    }

    for (i, (first, year, first_days)) in expanded.iter().enumerate() {
        for (second, other_year, second_days) in expanded.iter().skip(i + 1) {
            if year != other_year {
                continue;
            }
            let shared: DaySet =
                first_days.intersection(second_days).copied().collect();
            if !shared.is_empty() {
                report.overlaps.push(Overlap {
                    first: (*first).clone(),
                    second: (*second).clone(),
                    days: collapse(&shared),
                });
            }
        }
    }

    report
}

/// Fail with [`CoreError::Validation`] unless `seasons` is clean.
pub fn ensure_clean(seasons: &SeasonCollection) -> Result<(), CoreError> {
    let report = check(seasons);
    if report.is_clean() {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Season collection has {} overlap(s) and {} malformed season(s)",
        report.overlaps.len(),
        report.issues.len()
    )))
}
