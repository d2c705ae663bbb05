//! Repository for the `tracks` table.

use sqlx::PgPool;
use tracklist_core::listing::{SortField, SortOrder, SortSpec, TrackFilter};
use tracklist_core::types::TrackId;
use tracklist_core::validation::TrackFields;

use crate::models::track::Track;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, artist, album, created_at, updated_at";

/// Provides CRUD and paginated listing for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &TrackFields) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (id, title, artist, album) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(TrackId::now_v7())
            .bind(&input.title)
            .bind(&input.artist)
            .bind(&input.album)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its id.
    pub async fn find_by_id(pool: &PgPool, id: TrackId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count tracks matching the filter, ignoring pagination.
    pub async fn count(pool: &PgPool, filter: &TrackFilter) -> Result<u64, sqlx::Error> {
        let (where_clause, patterns) = build_where(filter);
        let query = format!("SELECT COUNT(*) FROM tracks {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for pattern in patterns {
            q = q.bind(pattern);
        }
        let total = q.fetch_one(pool).await?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    /// Fetch one page of tracks matching the filter.
    ///
    /// Ties on the sort column are broken by id in the same direction.
    pub async fn list_page(
        pool: &PgPool,
        filter: &TrackFilter,
        sort: SortSpec,
        skip: u64,
        limit: u32,
    ) -> Result<Vec<Track>, sqlx::Error> {
        let (where_clause, patterns) = build_where(filter);
        let bind_idx = patterns.len() + 1;
        let direction = sort_direction(sort.order);

        let query = format!(
            "SELECT {COLUMNS} FROM tracks \
             {where_clause} \
             ORDER BY {column} {direction}, id {direction} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            column = sort_column(sort.field),
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Track>(&query);
        for pattern in patterns {
            q = q.bind(pattern);
        }
        q.bind(i64::from(limit))
            .bind(i64::try_from(skip).unwrap_or(i64::MAX))
            .fetch_all(pool)
            .await
    }

    /// Replace title, artist and album, refreshing `updated_at`.
    ///
    /// `updated_at` always moves forward, even for two updates inside the
    /// same clock tick. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: TrackId,
        input: &TrackFields,
    ) -> Result<Option<Track>, sqlx::Error> {
        let query = format!(
            "UPDATE tracks SET \
                title = $2, \
                artist = $3, \
                album = $4, \
                updated_at = GREATEST(now(), updated_at + interval '1 microsecond') \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.artist)
            .bind(&input.album)
            .fetch_optional(pool)
            .await
    }

    /// Delete a track by id. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: TrackId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Query helpers
// ---------------------------------------------------------------------------

/// Build the `WHERE` clause for a filter plus the `ILIKE` patterns to bind,
/// numbered from `$1`.
fn build_where(filter: &TrackFilter) -> (String, Vec<String>) {
    let mut conditions = Vec::new();
    let mut patterns = Vec::new();

    for (bind_idx, (column, term)) in (1..).zip(filter.terms()) {
        conditions.push(format!("{column} ILIKE ${bind_idx} ESCAPE '\\'"));
        patterns.push(format!("%{}%", escape_like(term)));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (where_clause, patterns)
}

/// Escape `LIKE` wildcards so the term matches as a literal substring.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `ORDER BY` expression for a sort field. Text columns compare byte-wise
/// (`COLLATE "C"`) so order does not depend on the database locale.
fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Title => r#"title COLLATE "C""#,
        SortField::Artist => r#"artist COLLATE "C""#,
        SortField::Album => r#"album COLLATE "C""#,
        SortField::CreatedAt => "created_at",
        SortField::UpdatedAt => "updated_at",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}
