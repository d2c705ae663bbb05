//! PostgreSQL-backed track store.

use async_trait::async_trait;
use tracklist_core::listing::{SortSpec, TrackFilter};
use tracklist_core::types::TrackId;
use tracklist_core::validation::TrackFields;

use super::{StoreResult, TrackStore};
use crate::models::track::Track;
use crate::repositories::TrackRepo;
use crate::DbPool;

/// Delegates every operation to [`TrackRepo`] on a shared pool.
#[derive(Debug, Clone)]
pub struct PgTrackStore {
    pool: DbPool,
}

impl PgTrackStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl TrackStore for PgTrackStore {
    async fn count(&self, filter: &TrackFilter) -> StoreResult<u64> {
        TrackRepo::count(&self.pool, filter).await
    }

    async fn find(
        &self,
        filter: &TrackFilter,
        sort: SortSpec,
        skip: u64,
        limit: u32,
    ) -> StoreResult<Vec<Track>> {
        TrackRepo::list_page(&self.pool, filter, sort, skip, limit).await
    }

    async fn insert(&self, fields: &TrackFields) -> StoreResult<Track> {
        TrackRepo::create(&self.pool, fields).await
    }

    async fn find_by_id(&self, id: TrackId) -> StoreResult<Option<Track>> {
        TrackRepo::find_by_id(&self.pool, id).await
    }

    async fn update(&self, id: TrackId, fields: &TrackFields) -> StoreResult<Option<Track>> {
        TrackRepo::update(&self.pool, id, fields).await
    }

    async fn delete(&self, id: TrackId) -> StoreResult<bool> {
        TrackRepo::delete(&self.pool, id).await
    }

    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}
