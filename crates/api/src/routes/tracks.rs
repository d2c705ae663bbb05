//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::tracks;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list).post(tracks::create))
        .route(
            "/{id}",
            get(tracks::get_by_id)
                .put(tracks::update)
                .delete(tracks::delete),
        )
}
