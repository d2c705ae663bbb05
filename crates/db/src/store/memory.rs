//! In-process track store.
//!
//! Backs the API when `TRACK_STORE=memory` and in tests. Filtering, ordering
//! and paging follow the same rules as the PostgreSQL store.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracklist_core::listing::{SortField, SortSpec, TrackFilter};
use tracklist_core::types::{Timestamp, TrackId};
use tracklist_core::validation::TrackFields;

use super::{StoreResult, TrackStore};
use crate::models::track::Track;

#[derive(Debug, Default)]
pub struct MemoryTrackStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    tracks: Vec<Track>,
    last_tick: Option<Timestamp>,
}

impl Inner {
    /// Wall-clock time, forced strictly past the previously issued stamp.
    fn tick(&mut self) -> Timestamp {
        let now = Utc::now();
        let next = match self.last_tick {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_tick = Some(next);
        next
    }
}

impl MemoryTrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn matching<'a>(tracks: &'a [Track], filter: &'a TrackFilter) -> impl Iterator<Item = &'a Track> {
        tracks
            .iter()
            .filter(move |t| filter.matches(&t.title, &t.artist, &t.album))
    }
}

fn compare(a: &Track, b: &Track, sort: SortSpec) -> Ordering {
    let natural = match sort.field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Artist => a.artist.cmp(&b.artist),
        SortField::Album => a.album.cmp(&b.album),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    sort.order.apply(natural.then_with(|| a.id.cmp(&b.id)))
}

#[async_trait]
impl TrackStore for MemoryTrackStore {
    async fn count(&self, filter: &TrackFilter) -> StoreResult<u64> {
        let inner = self.inner.read().await;
        Ok(Self::matching(&inner.tracks, filter).count() as u64)
    }

    async fn find(
        &self,
        filter: &TrackFilter,
        sort: SortSpec,
        skip: u64,
        limit: u32,
    ) -> StoreResult<Vec<Track>> {
        let inner = self.inner.read().await;
        let mut matched: Vec<&Track> = Self::matching(&inner.tracks, filter).collect();
        matched.sort_by(|a, b| compare(a, b, sort));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matched.into_iter().skip(skip).take(limit).cloned().collect())
    }

    async fn insert(&self, fields: &TrackFields) -> StoreResult<Track> {
        let mut inner = self.inner.write().await;
        let now = inner.tick();
        let track = Track {
            id: TrackId::now_v7(),
            title: fields.title.clone(),
            artist: fields.artist.clone(),
            album: fields.album.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.tracks.push(track.clone());
        Ok(track)
    }

    async fn find_by_id(&self, id: TrackId) -> StoreResult<Option<Track>> {
        let inner = self.inner.read().await;
        Ok(inner.tracks.iter().find(|t| t.id == id).cloned())
    }

    async fn update(&self, id: TrackId, fields: &TrackFields) -> StoreResult<Option<Track>> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.tracks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        let now = inner.tick();
        let track = &mut inner.tracks[index];
        track.title = fields.title.clone();
        track.artist = fields.artist.clone();
        track.album = fields.album.clone();
        track.updated_at = now;
        Ok(Some(track.clone()))
    }

    async fn delete(&self, id: TrackId) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.tracks.len();
        inner.tracks.retain(|t| t.id != id);
        Ok(inner.tracks.len() < before)
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
