#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use staykit_core::year_copy::CopyConflictPolicy;
use tower::ServiceExt;

use staykit_api::config::ServerConfig;
use staykit_api::router::build_app_router;
use staykit_api::state::AppState;
use staykit_api::store::InMemorySeasonStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        default_copy_policy: CopyConflictPolicy::SkipExisting,
        data_dir: None,
        session_idle_secs: 1800,
    }
}

/// Shared state backed by a fresh in-memory store.
pub fn test_state() -> AppState {
    AppState::new(Arc::new(InMemorySeasonStore::new()), test_config())
}

/// Build the full application router with all middleware layers, exactly
/// as `main.rs` does.
pub fn build_test_app() -> Router {
    build_app_router(test_state(), &test_config())
}

/// Build the router over an existing state, so tests can keep sending
/// requests against the same store.
pub fn build_app_with(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
