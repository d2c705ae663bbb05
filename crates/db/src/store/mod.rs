//! The track store seam and the list algorithm built on it.
//!
//! A [`TrackStore`] exposes the document-store style operations the API
//! needs (count, filtered/sorted/paged find, insert, find-by-id, update,
//! delete). [`fetch_page`] composes them into the list contract.

mod memory;
mod postgres;

use async_trait::async_trait;
use tracklist_core::listing::{ListQuery, Page, Pagination, SortSpec, TrackFilter};
use tracklist_core::types::TrackId;
use tracklist_core::validation::TrackFields;

use crate::models::track::Track;

pub use memory::MemoryTrackStore;
pub use postgres::PgTrackStore;

/// Store operations return sqlx errors so the API maps every backend the
/// same way.
pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait TrackStore: Send + Sync {
    /// Number of tracks matching `filter`, ignoring pagination.
    async fn count(&self, filter: &TrackFilter) -> StoreResult<u64>;

    /// Tracks matching `filter` ordered by `sort`, skipping `skip` and
    /// returning at most `limit`.
    async fn find(
        &self,
        filter: &TrackFilter,
        sort: SortSpec,
        skip: u64,
        limit: u32,
    ) -> StoreResult<Vec<Track>>;

    /// Insert a new track. The store assigns id and timestamps.
    async fn insert(&self, fields: &TrackFields) -> StoreResult<Track>;

    async fn find_by_id(&self, id: TrackId) -> StoreResult<Option<Track>>;

    /// Replace the editable fields. Returns `None` if the id is unknown.
    async fn update(&self, id: TrackId, fields: &TrackFields) -> StoreResult<Option<Track>>;

    /// Hard delete. Returns false if the id is unknown.
    async fn delete(&self, id: TrackId) -> StoreResult<bool>;

    async fn health_check(&self) -> StoreResult<()>;
}

/// Count, paginate and fetch one page of tracks for `query`.
///
/// `totalItems` covers the full matching set. A page past the end yields an
/// empty `data` while still echoing the requested page number.
pub async fn fetch_page(store: &dyn TrackStore, query: &ListQuery) -> StoreResult<Page<Track>> {
    let total_items = store.count(&query.filter).await?;
    let pagination = Pagination::new(query, total_items);

    let skip = query.skip();
    let data = if skip >= total_items {
        Vec::new()
    } else {
        store
            .find(&query.filter, query.sort, skip, query.limit)
            .await?
    };

    Ok(Page { data, pagination })
}
