#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tracklist_api::config::{Environment, LogFormat, ServerConfig, StoreBackend};
use tracklist_api::router::build_app_router;
use tracklist_api::state::AppState;
use tracklist_db::store::{MemoryTrackStore, TrackStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        environment: Environment::Development,
        store: StoreBackend::Memory,
        seed_sample_data: false,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router around `store`.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, error traces, panic
/// recovery) that production uses.
pub fn build_test_app(store: Arc<dyn TrackStore>) -> Router {
    build_test_app_in(store, Environment::Development)
}

pub fn build_test_app_in(store: Arc<dyn TrackStore>, environment: Environment) -> Router {
    let config = ServerConfig {
        environment,
        ..test_config()
    };
    build_test_app_with_config(store, config)
}

pub fn build_test_app_with_config(store: Arc<dyn TrackStore>, config: ServerConfig) -> Router {
    build_app_router(AppState {
        store,
        config: Arc::new(config),
    })
}

/// Router over a fresh, empty in-memory store. The store handle is returned
/// so tests can seed it directly.
pub fn memory_app() -> (Router, Arc<MemoryTrackStore>) {
    let store = Arc::new(MemoryTrackStore::new());
    (build_test_app(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    send(app, method, uri, Some(body.to_string())).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
