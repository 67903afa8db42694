// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation shell, static asset and fallback route tests.

use axum::http::StatusCode;
use axum::{body::Body, http::Request};
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_home_lists_five_views() {
    let (app, _) = common::create_test_app("http://127.0.0.1:9");

    let (status, html) = common::get_page(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    for path in ["/users", "/teams", "/activities", "/workouts", "/leaderboard"] {
        assert!(
            html.contains(&format!(r#"<a href="{}" class="feature-card-link">"#, path)),
            "missing card for {}",
            path
        );
    }
    assert!(html.contains("Welcome to OctoFit Tracker"));
}

#[tokio::test]
async fn test_missing_logo_is_hidden_and_404s() {
    let (app, state) = common::create_test_app("http://127.0.0.1:9");
    assert!(!state.logo_available);

    let (_, home) = common::get_page(app.clone(), "/").await;
    assert!(!home.contains("<img"));

    let (status, _) = common::get_page(app, "/octofitapp-small.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logo_is_served_when_present() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("octofitapp-small.png"), b"\x89PNG fake").unwrap();

    let (app, state) =
        common::create_test_app_with_static("http://127.0.0.1:9", dir.path().to_path_buf());
    assert!(state.logo_available);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/octofitapp-small.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "image/png");

    let (_, home) = common::get_page(app, "/").await;
    assert!(home.contains(r#"<img src="/octofitapp-small.png""#));
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let (app, _) = common::create_test_app("http://127.0.0.1:9");

    let (status, html) = common::get_page(app, "/profile").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("404 · Not Found"));
    assert!(html.contains("/profile"));
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = common::create_test_app("http://127.0.0.1:9");

    let (status, body) = common::get_page(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_pages_carry_security_headers() {
    let (app, _) = common::create_test_app("http://127.0.0.1:9");

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
    assert!(response.headers().get("Content-Security-Policy").is_some());
}
