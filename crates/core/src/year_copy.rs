//! Copying a year's season set into another year.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::shift_date_by_years;
use crate::codec::canonicalize;
use crate::error::CoreError;
use crate::types::{DateRange, Season, SeasonCollection, SeasonId};

/// What to do when a copied season's id already exists in the target year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyConflictPolicy {
    /// Leave the existing season alone and drop the copy.
    #[default]
    SkipExisting,
    /// Replace the existing season with the copy (last write wins).
    Overwrite,
}

impl FromStr for CopyConflictPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip_existing" => Ok(Self::SkipExisting),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(CoreError::Validation(format!(
                "Invalid copy policy '{other}'. Must be one of: skip_existing, overwrite"
            ))),
        }
    }
}

/// Result of merging copied seasons into a target year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyOutcome {
    /// The target year's collection after the merge.
    pub seasons: SeasonCollection,
    /// Ids written by the copy.
    pub copied: Vec<SeasonId>,
    /// Ids left untouched because they already existed.
    pub skipped: Vec<SeasonId>,
}

/// Re-key an id from `from_year` to `to_year`.
///
/// Ids without the expected `"{from_year}-"` prefix keep their suffix
/// whole, so `"legacy"` becomes `"{to_year}-legacy"`.
pub fn derive_season_id(id: &str, from_year: i32, to_year: i32) -> SeasonId {
    let prefix = format!("{from_year}-");
    let suffix = id.strip_prefix(&prefix).unwrap_or(id);
    format!("{to_year}-{suffix}")
}

/// Clone every season of `source` into `to_year`, shifting each date by
/// `to_year - from_year` years.
///
/// Feb 29 lands on Feb 28 in common years; if that makes two ranges touch
/// they are merged so the result stays canonical.
pub fn copy_year(
    source: &SeasonCollection,
    from_year: i32,
    to_year: i32,
) -> Result<SeasonCollection, CoreError> {
    let delta = to_year - from_year;

    source
        .values()
        .map(|season| {
            let shifted = season
                .date_ranges
                .iter()
                .map(|range| {
                    DateRange::new(
                        shift_date_by_years(range.start, delta)?,
                        shift_date_by_years(range.end, delta)?,
                    )
                })
                .collect::<Result<Vec<_>, CoreError>>()?;

            let id = derive_season_id(&season.id, from_year, to_year);
            let copy = Season {
                id: id.clone(),
                year: to_year,
                name: season.name.clone(),
                color: season.color.clone(),
                date_ranges: canonicalize(&shifted)?,
            };
            Ok((id, copy))
        })
        .collect()
}

/// Merge copied seasons into the target year's existing collection.
pub fn merge_copied(
    existing: &SeasonCollection,
    copied: SeasonCollection,
    policy: CopyConflictPolicy,
) -> CopyOutcome {
    let mut seasons = existing.clone();
    let mut written = Vec::new();
    let mut skipped = Vec::new();

    for (id, season) in copied {
        if policy == CopyConflictPolicy::SkipExisting && existing.contains_key(&id) {
            skipped.push(id);
            continue;
        }
        written.push(id.clone());
        seasons.insert(id, season);
    }

    CopyOutcome {
        seasons,
        copied: written,
        skipped,
    }
}
