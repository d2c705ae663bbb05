//! Track entity model.

use serde::Serialize;
use sqlx::FromRow;
use tracklist_core::types::{Timestamp, TrackId};

/// A row from the `tracks` table.
///
/// Serializes in camelCase with the id as a plain UUID string.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
