//! Chirp API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

use crate::common::{unique_email, TestApp};

#[tokio::test]
async fn test_create_chirp_for_existing_user() {
    let app = TestApp::new();
    let user_id = app.create_user("a@b.com").await;

    let response = app
        .post_json("/api/chirps", &json!({ "body": "hello", "user_id": user_id }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    assert_eq!(body["body"], "hello");
    assert_eq!(body["user_id"], user_id.as_str());
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_chirp_keeps_body_verbatim() {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;
    let text = "  spaces, \"quotes\" and émoji 🐦  ";

    let response = app
        .post_json("/api/chirps", &json!({ "body": text, "user_id": user_id }))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json()["body"], text);
}

#[tokio::test]
async fn test_create_chirp_at_length_boundary() {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;

    let accepted = app
        .post_json(
            "/api/chirps",
            &json!({ "body": "a".repeat(140), "user_id": user_id }),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::CREATED);

    let rejected = app
        .post_json(
            "/api/chirps",
            &json!({ "body": "a".repeat(141), "user_id": user_id }),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.error_message(), "Chirp is too long");
    assert_eq!(app.store.chirp_count(), 1);
}

#[tokio::test]
async fn test_create_empty_chirp_fails() {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;
    let writes_before = app.store.write_calls();

    let response = app
        .post_json("/api/chirps", &json!({ "body": "", "user_id": user_id }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Chirp cannot be empty");
    assert_eq!(app.store.write_calls(), writes_before);
}

#[tokio::test]
async fn test_create_chirp_with_invalid_user_id_never_touches_store() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/chirps",
            &json!({ "body": "hello", "user_id": "definitely-not-a-uuid" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Invalid user_id");
    assert_eq!(app.store.write_calls(), 0);
}

#[tokio::test]
async fn test_create_chirp_with_malformed_json_fails() {
    let app = TestApp::new();

    let response = app.post_raw("/api/chirps", "body=hello").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Something went wrong");
    assert_eq!(app.store.write_calls(), 0);
}

#[test_case(None ; "missing content type")]
#[test_case(Some("text/plain") ; "text content type")]
#[tokio::test]
async fn test_create_chirp_without_json_content_type_fails(content_type: Option<&str>) {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;
    let writes_before = app.store.write_calls();
    let body = json!({ "body": "hello", "user_id": user_id }).to_string();

    let response = app
        .post_with_content_type("/api/chirps", &body, content_type)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Something went wrong");
    assert_eq!(app.store.write_calls(), writes_before);
    assert_eq!(app.store.chirp_count(), 0);
}

#[tokio::test]
async fn test_create_chirp_length_counts_bytes() {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;

    let accepted = app
        .post_json(
            "/api/chirps",
            &json!({ "body": "é".repeat(70), "user_id": user_id }),
        )
        .await;
    assert_eq!(accepted.status, StatusCode::CREATED);

    let rejected = app
        .post_json(
            "/api/chirps",
            &json!({ "body": "é".repeat(71), "user_id": user_id }),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.error_message(), "Chirp is too long");
}

#[tokio::test]
async fn test_create_chirp_for_unknown_user_is_server_error() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/chirps",
            &json!({ "body": "hello", "user_id": uuid::Uuid::new_v4() }),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_message(), "Something went wrong");
    assert_eq!(app.store.chirp_count(), 0);
}

#[tokio::test]
async fn test_list_chirps_returns_all_oldest_first() {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;
    for body in ["first", "second", "third"] {
        app.post_json("/api/chirps", &json!({ "body": body, "user_id": user_id }))
            .await;
    }

    let response = app.get("/api/chirps").await;

    assert_eq!(response.status, StatusCode::OK);
    let bodies: Vec<String> = response
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["body"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_list_chirps_when_empty() {
    let app = TestApp::new();

    let response = app.get("/api/chirps").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_get_chirp_by_id() {
    let app = TestApp::new();
    let user_id = app.create_user(&unique_email()).await;
    let created = app
        .post_json("/api/chirps", &json!({ "body": "find me", "user_id": user_id }))
        .await
        .json();
    let chirp_id = created["id"].as_str().unwrap();

    let response = app.get(&format!("/api/chirps/{}", chirp_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), created);
}

#[tokio::test]
async fn test_get_missing_chirp_is_not_found() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/chirps/{}", uuid::Uuid::new_v4()))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_message(), "Chirp not found");
}

#[tokio::test]
async fn test_get_chirp_with_invalid_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/chirps/not-a-uuid").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_message(), "Invalid chirp_id");
}

#[tokio::test]
async fn test_validate_chirp_endpoint() {
    let app = TestApp::new();

    let valid = app
        .post_json("/api/validate_chirp", &json!({ "body": "short and sweet" }))
        .await;
    assert_eq!(valid.status, StatusCode::OK);
    assert_eq!(valid.json(), json!({ "valid": true }));

    let too_long = app
        .post_json("/api/validate_chirp", &json!({ "body": "a".repeat(141) }))
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);
    assert_eq!(too_long.error_message(), "Chirp is too long");

    let malformed = app.post_raw("/api/validate_chirp", "[").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.error_message(), "Something went wrong");

    assert_eq!(app.store.write_calls(), 0);
}
