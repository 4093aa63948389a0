//! Route definitions for editor sessions, mounted at `/editor`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::editor;
use crate::state::AppState;

/// Editor session routes.
///
/// ```text
/// GET    /{id}          -> get_session
/// DELETE /{id}          -> close_session
/// POST   /{id}/events   -> post_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(editor::get_session).delete(editor::close_session),
        )
        .route("/{id}/events", post(editor::post_event))
}
