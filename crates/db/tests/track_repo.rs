//! Integration tests for `TrackRepo` against a real PostgreSQL database.
//!
//! These need `DATABASE_URL` pointing at a server `sqlx::test` can create
//! scratch databases on, so they are ignored by default. Run with
//! `cargo test -p tracklist-db -- --ignored`.

use sqlx::PgPool;
use tracklist_core::listing::{SortField, SortOrder, SortSpec, TrackFilter};
use tracklist_core::validation::TrackFields;
use tracklist_db::repositories::TrackRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_track(title: &str, artist: &str, album: &str) -> TrackFields {
    TrackFields {
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find(pool: PgPool) {
    let created = TrackRepo::create(&pool, &new_track("Firestarter", "The Prodigy", "Fat of the Land"))
        .await
        .unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let found = TrackRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Firestarter");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_advances_updated_at(pool: PgPool) {
    let created = TrackRepo::create(&pool, &new_track("Madness", "Muse", "The 2nd Law"))
        .await
        .unwrap();

    let updated = TrackRepo::update(&pool, created.id, &new_track("Madness", "Muse", "Live"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.album, "Live");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let created = TrackRepo::create(&pool, &new_track("The Grid", "Daft Punk", "TRON"))
        .await
        .unwrap();

    assert!(TrackRepo::delete(&pool, created.id).await.unwrap());
    assert!(!TrackRepo::delete(&pool, created.id).await.unwrap());
    assert!(TrackRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_count_and_page_with_filter(pool: PgPool) {
    for (title, artist) in [("A", "The Prodigy"), ("B", "Muse"), ("C", "PRODIGY tribute")] {
        TrackRepo::create(&pool, &new_track(title, artist, "X")).await.unwrap();
    }

    let filter = TrackFilter::new(None, Some("prodigy".into()), None);
    assert_eq!(TrackRepo::count(&pool, &filter).await.unwrap(), 2);

    let sort = SortSpec::new(SortField::Title, SortOrder::Asc);
    let page = TrackRepo::list_page(&pool, &filter, sort, 0, 10).await.unwrap();
    let titles: Vec<_> = page.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_like_wildcards_match_literally(pool: PgPool) {
    TrackRepo::create(&pool, &new_track("100% Pure", "x", "y")).await.unwrap();
    TrackRepo::create(&pool, &new_track("1000 Pure", "x", "y")).await.unwrap();

    let filter = TrackFilter::new(Some("0%".into()), None, None);
    assert_eq!(TrackRepo::count(&pool, &filter).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_skip_and_limit(pool: PgPool) {
    for title in ["A", "B", "C"] {
        TrackRepo::create(&pool, &new_track(title, "x", "y")).await.unwrap();
    }

    let sort = SortSpec::new(SortField::Title, SortOrder::Desc);
    let page = TrackRepo::list_page(&pool, &TrackFilter::default(), sort, 1, 1)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title, "B");
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_text_sort_is_bytewise(pool: PgPool) {
    for title in ["apple", "Banana", "cherry"] {
        TrackRepo::create(&pool, &new_track(title, "x", "y")).await.unwrap();
    }

    let sort = SortSpec::new(SortField::Title, SortOrder::Asc);
    let page = TrackRepo::list_page(&pool, &TrackFilter::default(), sort, 0, 10)
        .await
        .unwrap();
    let titles: Vec<_> = page.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Banana", "apple", "cherry"]);
}
