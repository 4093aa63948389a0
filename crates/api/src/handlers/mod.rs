//! HTTP handlers. Each one loads a snapshot, calls the engine, and writes
//! back only what changed.

pub mod calendar;
pub mod editor;
pub mod seasons;

use staykit_core::season::{changed_season_ids, SeasonDiff};
use staykit_core::types::{SeasonCollection, MAX_YEAR, MIN_YEAR};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Longest accepted scope key.
pub const MAX_SCOPE_LEN: usize = 64;

/// Scopes are tenant/property keys: ASCII letters, digits, `-` and `_`.
pub fn validate_scope(scope: &str) -> AppResult<()> {
    if scope.is_empty() || scope.len() > MAX_SCOPE_LEN {
        return Err(AppError::BadRequest(format!(
            "Scope must be 1-{MAX_SCOPE_LEN} characters"
        )));
    }
    if !scope
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::BadRequest(format!(
            "Invalid scope '{scope}': use letters, digits, '-' or '_'"
        )));
    }
    Ok(())
}

/// Years must fit the four-digit `YYYY` date format.
pub fn validate_year(year: i32) -> AppResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
        )))
    }
}

/// Diff `before` against `after` and persist the changed seasons.
///
/// The caller must hold the edit lock for `scope`/`year`.
pub(crate) async fn commit(
    state: &AppState,
    scope: &str,
    year: i32,
    before: &SeasonCollection,
    after: &SeasonCollection,
) -> AppResult<SeasonDiff> {
    let diff = changed_season_ids(before, after);
    if diff.is_empty() {
        tracing::debug!(scope, year, "No season changes to persist");
        return Ok(diff);
    }

    state.store.save(scope, year, after, &diff).await?;

    tracing::info!(
        scope,
        year,
        upserted = diff.upserted.len(),
        deleted = diff.deleted.len(),
        "Season changes persisted",
    );

    Ok(diff)
}
