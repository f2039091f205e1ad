//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::TimeZone;
use http_body_util::BodyExt;
use tower::ServiceExt;

use darkwalk_api::routes;
use darkwalk_api::state::AppState;
use darkwalk_core::clock::Clock;
use darkwalk_test_support::{FixedClock, InMemoryProgressRepository, InMemoryStoryRepository};

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::Utc.with_ymd_and_hms(2026, 8, 7, 21, 0, 0).unwrap(),
    ))
}

/// Build the full app router over in-memory repositories and a fixed
/// clock. Uses the same route structure as `main.rs`. The router is
/// cloned per request, so one instance carries state across calls.
pub fn build_test_app() -> Router {
    let app_state = AppState::new(
        Arc::new(InMemoryProgressRepository::new()),
        Arc::new(InMemoryStoryRepository::new()),
        fixed_clock(),
    );

    Router::new()
        .merge(routes::health::router())
        .nest("/api/progress", routes::progress::router())
        .nest("/api/story", routes::story::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return status + JSON response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(app, request).await
}

/// Send a GET request and return status + JSON response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}
