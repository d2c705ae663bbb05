//! Integration tests for the health check, banner and general HTTP behaviour.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, get, memory_app, send_raw};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (app, _store) = memory_app();
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

// ---------------------------------------------------------------------------
// Test: GET / returns the plain-text banner
// ---------------------------------------------------------------------------

#[tokio::test]
async fn root_returns_banner() {
    let (app, _store) = memory_app();
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_bytes(response).await;
    assert_eq!(body, b"Music Tracker API Running");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns a 404 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let (app, _store) = memory_app();
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Route not found");
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let (app, _store) = memory_app();
    let response = send_raw(app, Method::PATCH, "/api/tracks", "{}").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Method not allowed");
}

#[tokio::test]
async fn unsupported_method_on_item_route_is_enveloped() {
    let (app, _store) = memory_app();
    let response = send_raw(app, Method::POST, "/api/tracks/some-id", "{}").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["status"], "error");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _store) = memory_app();
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let (app, _store) = memory_app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-me-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let (app, _store) = memory_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/tracks")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap();
    assert!(methods.contains("PUT"));
}

#[tokio::test]
async fn health_reports_degraded_store() {
    use async_trait::async_trait;
    use tracklist_core::listing::{SortSpec, TrackFilter};
    use tracklist_core::types::TrackId;
    use tracklist_core::validation::TrackFields;
    use tracklist_db::models::track::Track;
    use tracklist_db::store::{StoreResult, TrackStore};

    struct Unreachable;

    #[async_trait]
    impl TrackStore for Unreachable {
        async fn count(&self, _: &TrackFilter) -> StoreResult<u64> {
            Err(sqlx::Error::PoolClosed)
        }
        async fn find(&self, _: &TrackFilter, _: SortSpec, _: u64, _: u32) -> StoreResult<Vec<Track>> {
            Err(sqlx::Error::PoolClosed)
        }
        async fn insert(&self, _: &TrackFields) -> StoreResult<Track> {
            Err(sqlx::Error::PoolClosed)
        }
        async fn find_by_id(&self, _: TrackId) -> StoreResult<Option<Track>> {
            Err(sqlx::Error::PoolClosed)
        }
        async fn update(&self, _: TrackId, _: &TrackFields) -> StoreResult<Option<Track>> {
            Err(sqlx::Error::PoolClosed)
        }
        async fn delete(&self, _: TrackId) -> StoreResult<bool> {
            Err(sqlx::Error::PoolClosed)
        }
        async fn health_check(&self) -> StoreResult<()> {
            Err(sqlx::Error::PoolClosed)
        }
    }

    let app = common::build_test_app(Arc::new(Unreachable));
    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
