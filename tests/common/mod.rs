// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use octofit_web::config::Config;
use octofit_web::routes::create_router;
use octofit_web::AppState;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Start a fake fitness API on a random local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Fake API answering `GET /api/{resource}/` with a fixed JSON body.
#[allow(dead_code)]
pub async fn upstream_returning(resource: &str, body: Value) -> String {
    let path = format!("/api/{}/", resource);
    spawn_upstream(Router::new().route(&path, get(move || async move { Json(body) }))).await
}

/// Like [`upstream_returning`], also counting the requests it receives.
#[allow(dead_code)]
pub async fn upstream_counting(resource: &str, body: Value) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let path = format!("/api/{}/", resource);
    let app = Router::new().route(
        &path,
        get(move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Json(body)
        }),
    );
    (spawn_upstream(app).await, hits)
}

/// Like [`upstream_returning`], answering only after `delay`.
#[allow(dead_code)]
pub async fn upstream_delayed(resource: &str, body: Value, delay: Duration) -> String {
    let path = format!("/api/{}/", resource);
    let app = Router::new().route(
        &path,
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(body)
        }),
    );
    spawn_upstream(app).await
}

/// Fake API answering `GET /api/{resource}/` with a bare status.
#[allow(dead_code)]
pub async fn upstream_failing(resource: &str, status: StatusCode) -> String {
    let path = format!("/api/{}/", resource);
    spawn_upstream(Router::new().route(&path, get(move || async move { status }))).await
}

/// Base URL nothing is listening on.
#[allow(dead_code)]
pub async fn unreachable_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Create the app pointed at `api_url`, with no static directory.
#[allow(dead_code)]
pub fn create_test_app(api_url: &str) -> (Router, Arc<AppState>) {
    create_test_app_with_static(api_url, PathBuf::from("/nonexistent-static-dir"))
}

#[allow(dead_code)]
pub fn create_test_app_with_static(api_url: &str, static_dir: PathBuf) -> (Router, Arc<AppState>) {
    let config = Config {
        api_url_override: Some(api_url.to_string()),
        static_dir,
        ..Config::default()
    };
    let state = Arc::new(AppState::new(config));
    (create_router(state.clone()), state)
}

/// GET `uri` and collect the whole (streamed) body as text.
#[allow(dead_code)]
pub async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Number of rendered table rows.
#[allow(dead_code)]
pub fn row_count(html: &str) -> usize {
    html.matches("<tr data-key=").count()
}
