//! Handlers for editor sessions: the click/hover/escape interaction that
//! turns day clicks into paint and toggle-off operations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use staykit_core::codec::collapse;
use staykit_core::error::CoreError;
use staykit_core::selection::{Effect, Selection};
use staykit_core::types::{DateRange, Day, SeasonId};
use uuid::Uuid;

use super::{commit, validate_scope, validate_year};
use crate::editor::EditorSession;
use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, SeasonsChanged};
use crate::state::AppState;

/// One interaction event from the calendar UI.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    Click { day: String },
    Hover { day: String },
    Escape,
    SelectSeason { season_id: Option<SeasonId> },
    SetYear { year: i32 },
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub effect: Effect,
    pub selection: Selection,
    /// Days a click would paint right now (hover events only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Vec<DateRange>>,
    /// Present when the event changed the season collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<SeasonsChanged>,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Editor session {id} not found"))
}

async fn find_session(state: &AppState, id: Uuid) -> AppResult<EditorSession> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/scopes/{scope}/years/{year}/editor
pub async fn open_session(
    State(state): State<AppState>,
    Path((scope, year)): Path<(String, i32)>,
) -> AppResult<impl IntoResponse> {
    validate_scope(&scope)?;
    validate_year(year)?;

    let session = state.sessions.open(&scope, year).await;

    tracing::info!(session_id = %session.id, scope = %scope, year, "Editor session opened");

    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// GET /api/v1/editor/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let session = find_session(&state, id).await?;
    Ok(Json(DataResponse { data: session }))
}

/// DELETE /api/v1/editor/{id}
pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    if !state.sessions.close(id).await {
        return Err(session_not_found(id));
    }
    tracing::info!(session_id = %id, "Editor session closed");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/editor/{id}/events
///
/// Feed one event through the session's selection state machine. Clicks
/// that complete a range or toggle a day off are applied and persisted
/// under the collection's edit lock.
///
/// The session stays locked from reading the selection until the new one is
/// stored, so concurrent events for one session apply in sequence.
pub async fn post_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(event): Json<EditorEvent>,
) -> AppResult<impl IntoResponse> {
    let mut session = state
        .sessions
        .lock(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    let scope = session.scope.clone();
    let mut selection = session.selection.clone();
    let mut preview = None;
    let mut changes = None;

    let effect = match event {
        EditorEvent::Click { day } => {
            let day: Day = day.parse()?;
            let year = selection.year();

            let _guard = state.locks.acquire(&scope, year).await;
            let before = state.store.load(&scope, year).await?;
            let effect = selection.click(&before, day);

            if let Some(after) = Selection::apply(&effect, &before)? {
                let diff = commit(&state, &scope, year, &before, &after).await?;
                changes = Some(SeasonsChanged::new(after, diff));
            }
            effect
        }
        EditorEvent::Hover { day } => {
            let day: Day = day.parse()?;
            preview = Some(collapse(&selection.preview(day)?));
            Effect::None
        }
        EditorEvent::Escape => selection.escape(),
        EditorEvent::SelectSeason { season_id } => {
            if let Some(season_id) = &season_id {
                let seasons = state.store.load(&scope, selection.year()).await?;
                if !seasons.contains_key(season_id) {
                    return Err(CoreError::season_not_found(season_id).into());
                }
            }
            selection.select_season(season_id)
        }
        EditorEvent::SetYear { year } => {
            validate_year(year)?;
            selection.set_year(year)
        }
    };

    session.selection = selection.clone();
    session.touch();
    drop(session);

    if effect.is_mutation() {
        tracing::info!(session_id = %id, scope = %scope, ?effect, "Editor event applied");
    } else {
        tracing::debug!(session_id = %id, ?effect, "Editor event");
    }

    Ok(Json(DataResponse {
        data: EventResponse {
            effect,
            selection,
            preview,
            changes,
        },
    }))
}
