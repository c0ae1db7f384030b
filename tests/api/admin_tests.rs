//! Admin API Tests
//!
//! Visit counting through the file server, the metrics page, and reset.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{unique_email, TestApp};

#[tokio::test]
async fn test_file_server_visits_are_counted() {
    let app = TestApp::new();

    let page = app.get("/app/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.text().contains("Welcome to Chirpy"));

    app.get("/app/index.html").await;
    app.get("/app/missing.txt").await;

    assert_eq!(app.hits.get(), 3);
}

#[tokio::test]
async fn test_api_and_assets_are_not_counted() {
    let app = TestApp::new();

    app.get("/api/healthz").await;
    app.get("/api/chirps").await;
    app.get("/assets/logo.png").await;
    app.get("/admin/metrics").await;

    assert_eq!(app.hits.get(), 0);
}

#[tokio::test]
async fn test_metrics_page_shows_visits() {
    let app = TestApp::new();
    for _ in 0..4 {
        app.get("/app/").await;
    }

    let response = app.get("/admin/metrics").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert!(response.text().contains("Chirpy has been visited 4 times!"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_visits_are_all_counted() {
    let app = TestApp::new();

    let mut visits = tokio::task::JoinSet::new();
    for _ in 0..50 {
        let router = app.router.clone();
        visits.spawn(async move {
            let request = Request::builder()
                .uri("/app/")
                .body(Body::empty())
                .unwrap();
            router.oneshot(request).await.unwrap().status()
        });
    }
    while let Some(status) = visits.join_next().await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    assert_eq!(app.hits.get(), 50);
}

#[tokio::test]
async fn test_reset_in_dev_clears_everything() {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;
    app.post_json("/api/chirps", &json!({ "body": "bye", "user_id": user_id }))
        .await;
    app.get("/app/").await;
    app.get("/app/").await;

    let response = app.post("/admin/reset").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "ok");
    assert_eq!(app.hits.get(), 0);
    assert_eq!(app.store.user_count(), 0);
    assert_eq!(app.store.chirp_count(), 0);

    let chirps = app.get("/api/chirps").await;
    assert_eq!(chirps.json(), json!([]));
}

#[tokio::test]
async fn test_reset_outside_dev_is_forbidden_and_changes_nothing() {
    let app = TestApp::with_platform("production");
    app.create_user(&unique_email()).await;
    app.get("/app/").await;
    let writes_before = app.store.write_calls();

    let response = app.post("/admin/reset").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.error_message(),
        "Reset is only allowed in dev environment"
    );
    assert_eq!(app.hits.get(), 1);
    assert_eq!(app.store.user_count(), 1);
    assert_eq!(app.store.write_calls(), writes_before);
}

#[tokio::test]
async fn test_reset_with_unset_platform_is_forbidden() {
    let app = TestApp::with_platform("");

    let response = app.post("/admin/reset").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reset_store_failure_keeps_counter() {
    let app = TestApp::new();
    app.get("/app/").await;
    app.store.set_unavailable(true);

    let response = app.post("/admin/reset").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_message(), "Something went wrong");
    assert_eq!(app.hits.get(), 1);
}

#[tokio::test]
async fn test_reset_requires_post() {
    let app = TestApp::new();

    let response = app.get("/admin/reset").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
