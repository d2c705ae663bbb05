//! Handlers for the `/tracks` resource.
//!
//! List, create, read, update and delete track records. Listing applies the
//! shared filter/sort/paginate contract from `tracklist_core::listing`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tracklist_core::error::CoreError;
use tracklist_core::types::TrackId;
use tracklist_core::validation::{validate_track_fields, TrackFields};
use tracklist_db::models::track::Track;
use tracklist_db::store::fetch_page;

use crate::error::AppResult;
use crate::query::ListTracksParams;
use crate::response::DeleteResponse;
use crate::state::AppState;

/// Create/update body. Fields are optional here so that missing values are
/// reported as a 400 naming the fields; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TrackPayload {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

impl TrackPayload {
    fn validate(&self) -> Result<TrackFields, CoreError> {
        validate_track_fields(
            self.title.as_deref(),
            self.artist.as_deref(),
            self.album.as_deref(),
        )
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "Track",
        id: id.to_string(),
    }
}

/// Parse a path id. Anything that is not a UUID cannot name a track.
fn parse_track_id(raw: &str) -> Result<TrackId, CoreError> {
    raw.parse::<TrackId>().map_err(|_| not_found(raw))
}

/// Load an existing track or fail with 404.
async fn find_existing(state: &AppState, raw_id: &str) -> AppResult<Track> {
    let id = parse_track_id(raw_id)?;
    let track = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(raw_id))?;
    Ok(track)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/tracks?page=&limit=&title=&artist=&album=&sortBy=&sortOrder=
///
/// One page of tracks plus pagination metadata.
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListTracksParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let query = params.into_list_query();
    tracing::debug!(
        page = query.page,
        limit = query.limit,
        sort_by = %query.sort.field,
        sort_order = %query.sort.order,
        filtered = !query.filter.is_empty(),
        "Listing tracks"
    );

    let page = fetch_page(state.store.as_ref(), &query).await?;
    Ok(Json(page))
}

/// POST /api/tracks
///
/// Create a new track. Title, artist and album are required.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<TrackPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let fields = payload.validate()?;

    let track = state.store.insert(&fields).await?;
    tracing::info!(track_id = %track.id, "Track created");
    Ok((StatusCode::CREATED, Json(track)))
}

/// GET /api/tracks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let track = find_existing(&state, &id).await?;
    Ok(Json(track))
}

/// PUT /api/tracks/{id}
///
/// Replace title, artist and album. An unknown id is reported before a
/// missing field.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TrackPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let existing = find_existing(&state, &id).await?;
    let Json(payload) = payload?;
    let fields = payload.validate()?;

    let track = state
        .store
        .update(existing.id, &fields)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(track_id = %track.id, "Track updated");
    Ok(Json(track))
}

/// DELETE /api/tracks/{id}
///
/// Hard delete. Responds with the removed id.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let existing = find_existing(&state, &id).await?;

    if !state.store.delete(existing.id).await? {
        return Err(not_found(&id).into());
    }
    tracing::info!(track_id = %existing.id, "Track deleted");

    Ok(Json(DeleteResponse {
        message: "Track removed successfully",
        id,
    }))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn malformed_id_is_not_found() {
        assert_matches!(
            parse_track_id("not-a-uuid"),
            Err(CoreError::NotFound { entity: "Track", .. })
        );
    }

    #[test]
    fn uuid_id_parses() {
        let id = TrackId::now_v7();
        assert_eq!(parse_track_id(&id.to_string()).unwrap(), id);
    }
}
