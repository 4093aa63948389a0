pub mod editor;
pub mod health;
pub mod seasons;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scopes/{scope}/years/{year}/seasons                   list, create
/// /scopes/{scope}/years/{year}/seasons/{id}              update, delete
/// /scopes/{scope}/years/{year}/seasons/{id}/paint        paint a range (POST)
/// /scopes/{scope}/years/{year}/seasons/{id}/remove-day   toggle a day off (POST)
/// /scopes/{scope}/years/{year}/copy                      copy into another year (POST)
/// /scopes/{scope}/years/{year}/coverage                  per-season day counts
/// /scopes/{scope}/years/{year}/integrity                 overlap / shape check
/// /scopes/{scope}/years/{year}/months/{month}            month grid
/// /scopes/{scope}/years/{year}/editor                    open editor session (POST)
///
/// /editor/{id}                                           get, close
/// /editor/{id}/events                                    click, hover, escape, select (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/scopes/{scope}/years/{year}", seasons::router())
        .nest("/editor", editor::router())
}
