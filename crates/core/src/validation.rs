//! Required-field validation for track create and update payloads.

use crate::error::CoreError;

/// Title, artist and album after trimming. All three are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackFields {
    pub title: String,
    pub artist: String,
    pub album: String,
}

/// Check that title, artist and album are all present and non-blank.
///
/// The error message lists every missing field, in title/artist/album order.
pub fn validate_track_fields(
    title: Option<&str>,
    artist: Option<&str>,
    album: Option<&str>,
) -> Result<TrackFields, CoreError> {
    let title = title.map(str::trim).filter(|s| !s.is_empty());
    let artist = artist.map(str::trim).filter(|s| !s.is_empty());
    let album = album.map(str::trim).filter(|s| !s.is_empty());

    match (title, artist, album) {
        (Some(title), Some(artist), Some(album)) => Ok(TrackFields {
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
        }),
        (title, artist, album) => {
            let missing: Vec<&str> = [
                ("title", title.is_none()),
                ("artist", artist.is_none()),
                ("album", album.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, is_missing)| is_missing.then_some(name))
            .collect();
            Err(CoreError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }
}
