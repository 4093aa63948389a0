//! Season partition engine: painting ranges onto seasons.
//!
//! Maintains the rule that a day belongs to at most one season per year.
//! Painting assigns the range to the target season and evicts those days
//! from every other season of the same year. Every result is computed from
//! the caller's snapshot; the input collection is never mutated.

use crate::codec::{collapse, expand, expand_into};
use crate::error::CoreError;
use crate::types::{DateRange, Day, DaySet, Season, SeasonCollection, SeasonId};

/// Assign `from..=to` to `target_id` and evict those days from its siblings.
///
/// The caller orders the bounds; a reversed pair is rejected rather than
/// swapped, and both bounds must fall in the target season's year. Sibling
/// seasons whose days are unaffected are returned exactly as they were
/// given, so a diff against the input only reports real changes.
pub fn paint_range(
    seasons: &SeasonCollection,
    target_id: &str,
    from: Day,
    to: Day,
) -> Result<SeasonCollection, CoreError> {
    let target = seasons
        .get(target_id)
        .ok_or_else(|| CoreError::season_not_found(target_id))?;

    let range = DateRange::new(from, to)?;
    if from.year() != target.year || to.year() != target.year {
        return Err(CoreError::Validation(format!(
            "Range {from}..={to} lies outside season '{target_id}' year {}",
            target.year
        )));
    }
    let painted = expand(&[range])?;

    let mut target_days = expand(&target.date_ranges)?;
    target_days.extend(painted.iter().copied());

    let mut updated = SeasonCollection::new();
    for (id, season) in seasons {
        if id == target_id {
            updated.insert(
                id.clone(),
                Season {
                    date_ranges: collapse(&target_days),
                    ..season.clone()
                },
            );
            continue;
        }

        if season.year != target.year {
            updated.insert(id.clone(), season.clone());
            continue;
        }

        let evicted = evict(season, &painted)?;
        updated.insert(id.clone(), evicted);
    }

    Ok(updated)
}

/// Remove `painted` days from `season`, returning it unchanged when nothing
/// overlapped.
fn evict(season: &Season, painted: &DaySet) -> Result<Season, CoreError> {
    let mut days = expand(&season.date_ranges)?;
    let before = days.len();
    days.retain(|day| !painted.contains(day));

    if days.len() == before {
        return Ok(season.clone());
    }

    Ok(Season {
        date_ranges: collapse(&days),
        ..season.clone()
    })
}

/// Drop a single day from a season's ranges (the single-click toggle-off).
pub fn remove_day(season: &Season, day: Day) -> Result<Season, CoreError> {
    let mut days = expand(&season.date_ranges)?;
    days.remove(&day);
    Ok(Season {
        date_ranges: collapse(&days),
        ..season.clone()
    })
}

/// [`remove_day`] addressed by id within a collection.
pub fn remove_day_in(
    seasons: &SeasonCollection,
    season_id: &str,
    day: Day,
) -> Result<SeasonCollection, CoreError> {
    let season = seasons
        .get(season_id)
        .ok_or_else(|| CoreError::season_not_found(season_id))?;

    let mut updated = seasons.clone();
    updated.insert(season_id.to_string(), remove_day(season, day)?);
    Ok(updated)
}

/// The id of the season that owns `day`, if any.
///
/// When out-of-band data breaks the partition rule, the first owner in id
/// order wins, matching [`crate::month_view::day_assignments`].
pub fn season_for_day(seasons: &SeasonCollection, day: Day) -> Option<&SeasonId> {
    seasons
        .iter()
        .find(|(_, season)| season.date_ranges.iter().any(|r| r.contains(day)))
        .map(|(id, _)| id)
}

/// Expand every season into its day set.
pub(crate) fn expand_all(
    seasons: &SeasonCollection,
) -> Result<Vec<(&SeasonId, DaySet)>, CoreError> {
    seasons
        .iter()
        .map(|(id, season)| {
            let mut days = DaySet::new();
            for range in &season.date_ranges {
                expand_into(range, &mut days)?;
            }
            Ok((id, days))
        })
        .collect()
}
