//! Route definitions for season collections, mounted at
//! `/scopes/{scope}/years/{year}`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{calendar, editor, seasons};
use crate::state::AppState;

/// Year-scoped season routes.
///
/// ```text
/// GET    /seasons                    -> list_seasons
/// POST   /seasons                    -> create_season
/// PUT    /seasons/{id}               -> update_season
/// DELETE /seasons/{id}               -> delete_season
/// POST   /seasons/{id}/paint         -> paint_range
/// POST   /seasons/{id}/remove-day    -> remove_day
/// POST   /copy                       -> copy_year
/// GET    /coverage                   -> get_coverage
/// GET    /integrity                  -> get_integrity
/// GET    /months/{month}             -> get_month
/// POST   /editor                     -> open_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/seasons",
            get(seasons::list_seasons).post(seasons::create_season),
        )
        .route(
            "/seasons/{id}",
            put(seasons::update_season).delete(seasons::delete_season),
        )
        .route("/seasons/{id}/paint", post(seasons::paint_range))
        .route("/seasons/{id}/remove-day", post(seasons::remove_day))
        .route("/copy", post(calendar::copy_year))
        .route("/coverage", get(calendar::get_coverage))
        .route("/integrity", get(calendar::get_integrity))
        .route("/months/{month}", get(calendar::get_month))
        .route("/editor", post(editor::open_session))
}
