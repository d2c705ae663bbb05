pub mod health;
pub mod tracks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tracks                                          list, create
/// /tracks/{id}                                     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tracks", tracks::router())
}
