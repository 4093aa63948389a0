//! Handlers for season CRUD, painting and day toggling.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use staykit_core::error::CoreError;
use staykit_core::partition;
use staykit_core::season;
use staykit_core::types::Day;

use super::{commit, validate_scope, validate_year};
use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, SeasonsChanged};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateSeason {
    pub name: String,
    /// Defaults to the next unused palette color.
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSeason {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Dates arrive as strings so malformed input maps to `INVALID_DATE`.
#[derive(Debug, Deserialize)]
pub struct PaintRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveDay {
    pub day: String,
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/scopes/{scope}/years/{year}/seasons
pub async fn list_seasons(
    State(state): State<AppState>,
    Path((scope, year)): Path<(String, i32)>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;

    let seasons = state.store.load(&scope, year).await?;

    Ok(Json(DataResponse {
        data: seasons.into_values().collect::<Vec<_>>(),
    }))
}

/// POST /api/v1/scopes/{scope}/years/{year}/seasons
///
/// Create an empty season. Returns 409 if the derived id already exists.
pub async fn create_season(
    State(state): State<AppState>,
    Path((scope, year)): Path<(String, i32)>,
    Json(input): Json<CreateSeason>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;

    let _guard = state.locks.acquire(&scope, year).await;
    let before = state.store.load(&scope, year).await?;

    let created = season::create_season(&before, year, &input.name, input.color.as_deref())?;
    let mut after = before.clone();
    after.insert(created.id.clone(), created.clone());
    commit(&state, &scope, year, &before, &after).await?;

    tracing::info!(
        scope = %scope,
        year,
        season_id = %created.id,
        color = %created.color,
        "Season created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /api/v1/scopes/{scope}/years/{year}/seasons/{id}
///
/// Rename and/or recolor. The id never changes.
pub async fn update_season(
    State(state): State<AppState>,
    Path((scope, year, season_id)): Path<(String, i32, String)>,
    Json(input): Json<UpdateSeason>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;
    if input.name.is_none() && input.color.is_none() {
        return Err(AppError::BadRequest(
            "Provide at least one of 'name' or 'color'".into(),
        ));
    }

    let _guard = state.locks.acquire(&scope, year).await;
    let before = state.store.load(&scope, year).await?;

    let mut updated = before
        .get(&season_id)
        .cloned()
        .ok_or_else(|| CoreError::season_not_found(&season_id))?;
    if let Some(name) = &input.name {
        updated = season::rename_season(&updated, name)?;
    }
    if let Some(color) = &input.color {
        updated = season::recolor_season(&updated, color)?;
    }

    let mut after = before.clone();
    after.insert(season_id.clone(), updated.clone());
    commit(&state, &scope, year, &before, &after).await?;

    tracing::info!(scope = %scope, year, season_id = %season_id, "Season updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/scopes/{scope}/years/{year}/seasons/{id}
///
/// Other seasons are untouched; the deleted season's days become unassigned.
pub async fn delete_season(
    State(state): State<AppState>,
    Path((scope, year, season_id)): Path<(String, i32, String)>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;

    let _guard = state.locks.acquire(&scope, year).await;
    let before = state.store.load(&scope, year).await?;

    let after = season::delete_season(&before, &season_id)?;
    commit(&state, &scope, year, &before, &after).await?;

    tracing::info!(scope = %scope, year, season_id = %season_id, "Season deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Painting
// ---------------------------------------------------------------------------

/// POST /api/v1/scopes/{scope}/years/{year}/seasons/{id}/paint
///
/// Assign `from..=to` to the season, evicting those days from its siblings.
pub async fn paint_range(
    State(state): State<AppState>,
    Path((scope, year, season_id)): Path<(String, i32, String)>,
    Json(input): Json<PaintRange>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;
    let from: Day = input.from.parse()?;
    let to: Day = input.to.parse()?;

    let _guard = state.locks.acquire(&scope, year).await;
    let before = state.store.load(&scope, year).await?;

    let after = partition::paint_range(&before, &season_id, from, to)?;
    let changes = commit(&state, &scope, year, &before, &after).await?;

    tracing::info!(
        scope = %scope,
        year,
        season_id = %season_id,
        %from,
        %to,
        changed = changes.upserted.len(),
        "Range painted",
    );

    Ok(Json(DataResponse {
        data: SeasonsChanged::new(after, changes),
    }))
}

/// POST /api/v1/scopes/{scope}/years/{year}/seasons/{id}/remove-day
///
/// Toggle a single day off the season.
pub async fn remove_day(
    State(state): State<AppState>,
    Path((scope, year, season_id)): Path<(String, i32, String)>,
    Json(input): Json<RemoveDay>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;
    let day: Day = input.day.parse()?;

    let _guard = state.locks.acquire(&scope, year).await;
    let before = state.store.load(&scope, year).await?;

    let after = partition::remove_day_in(&before, &season_id, day)?;
    let changes = commit(&state, &scope, year, &before, &after).await?;

    tracing::info!(scope = %scope, year, season_id = %season_id, %day, "Day removed");

    Ok(Json(DataResponse {
        data: SeasonsChanged::new(after, changes),
    }))
}
