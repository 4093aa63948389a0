//! Handlers for year-level views and operations: copy, coverage,
//! integrity and the month grid.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use staykit_core::types::{Season, SeasonId};
use staykit_core::year_copy::{self, CopyConflictPolicy};
use staykit_core::{coverage, integrity, month_view};

use super::{commit, validate_scope, validate_year};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CopyYearRequest {
    pub to_year: i32,
    /// Falls back to the server's configured default.
    pub policy: Option<CopyConflictPolicy>,
}

#[derive(Debug, Serialize)]
pub struct CopyYearResponse {
    pub from_year: i32,
    pub to_year: i32,
    pub policy: CopyConflictPolicy,
    pub copied: Vec<SeasonId>,
    pub skipped: Vec<SeasonId>,
    /// The target year's seasons after the copy.
    pub seasons: Vec<Season>,
}

/// POST /api/v1/scopes/{scope}/years/{year}/copy
///
/// Copy every season of `year` into `to_year`. Id collisions follow the
/// requested (or configured) conflict policy.
pub async fn copy_year(
    State(state): State<AppState>,
    Path((scope, year)): Path<(String, i32)>,
    Json(input): Json<CopyYearRequest>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;
    validate_year(input.to_year)?;
    if input.to_year == year {
        return Err(AppError::BadRequest(
            "Target year must differ from the source year".into(),
        ));
    }
    let policy = input.policy.unwrap_or(state.config.default_copy_policy);

    let source = state.store.load(&scope, year).await?;
    let copied = year_copy::copy_year(&source, year, input.to_year)?;

    let _guard = state.locks.acquire(&scope, input.to_year).await;
    let before = state.store.load(&scope, input.to_year).await?;
    let outcome = year_copy::merge_copied(&before, copied, policy);
    commit(&state, &scope, input.to_year, &before, &outcome.seasons).await?;

    tracing::info!(
        scope = %scope,
        from_year = year,
        to_year = input.to_year,
        ?policy,
        copied = outcome.copied.len(),
        skipped = outcome.skipped.len(),
        "Year copied",
    );

    Ok(Json(DataResponse {
        data: CopyYearResponse {
            from_year: year,
            to_year: input.to_year,
            policy,
            copied: outcome.copied,
            skipped: outcome.skipped,
            seasons: outcome.seasons.into_values().collect(),
        },
    }))
}

/// GET /api/v1/scopes/{scope}/years/{year}/coverage
pub async fn get_coverage(
    State(state): State<AppState>,
    Path((scope, year)): Path<(String, i32)>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;

    let seasons = state.store.load(&scope, year).await?;
    let report = coverage::coverage(year, &seasons)?;

    if report.has_integrity_warning() {
        tracing::warn!(
            scope = %scope,
            year,
            over_assigned_days = report.over_assigned_days,
            "Season coverage exceeds the year; seasons overlap",
        );
    }

    Ok(Json(DataResponse { data: report }))
}

/// GET /api/v1/scopes/{scope}/years/{year}/integrity
pub async fn get_integrity(
    State(state): State<AppState>,
    Path((scope, year)): Path<(String, i32)>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;

    let seasons = state.store.load(&scope, year).await?;
    let report = integrity::check(&seasons);

    if !report.is_clean() {
        tracing::warn!(
            scope = %scope,
            year,
            overlaps = report.overlaps.len(),
            issues = report.issues.len(),
            "Season integrity problems found",
        );
    }

    Ok(Json(DataResponse { data: report }))
}

/// GET /api/v1/scopes/{scope}/years/{year}/months/{month}
pub async fn get_month(
    State(state): State<AppState>,
    Path((scope, year, month)): Path<(String, i32, u32)>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;

    let seasons = state.store.load(&scope, year).await?;
    let grid = month_view::month_grid(year, month, &seasons)?;

    Ok(Json(DataResponse { data: grid }))
}
