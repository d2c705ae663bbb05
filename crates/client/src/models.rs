//! Wire types as the client sees them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A track as returned by the server. The id is kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackInput {
    pub title: String,
    pub artist: String,
    pub album: String,
}

impl TrackInput {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
        }
    }
}

/// Response to a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}
