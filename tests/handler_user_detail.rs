mod common;

use axum::{routing::get, Router};
use axum_test::TestServer;
use serde_json::{json, Value};
use user_detail::api::handlers::user_detail_handler;

fn app(state: user_detail::AppState) -> Router {
    Router::new()
        .route("/user/{id}", get(user_detail_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_user_detail_success() {
    let state = common::create_test_state(common::StubUserRepository::healthy());
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/user/1001").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["Profile"]["id"], 1001);
    assert_eq!(body["Profile"]["name"], "Alice");
    assert_eq!(body["Profile"]["address"], "12 Elm St");
    assert_eq!(body["Family"][0]["name"], "Bob");
    assert_eq!(body["Family"][0]["relation"], "spouse");
    assert_eq!(body["Transportation"], json!([]));
}

#[tokio::test]
async fn test_user_detail_missing_profile_is_zero_value() {
    let state = common::create_test_state(common::StubUserRepository::healthy());
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/user/42").await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["Profile"]["id"], 0);
    assert_eq!(body["Profile"]["name"], "");
    assert_eq!(body["Family"], json!([]));
}

#[tokio::test]
async fn test_user_detail_rejects_non_numeric_id() {
    let state = common::create_test_state(common::StubUserRepository::healthy());
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/user/abc").await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_user_detail_rejects_non_positive_id() {
    let state = common::create_test_state(common::StubUserRepository::healthy());
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/user/0").await;
    assert_eq!(response.status_code(), 400);

    let response = server.get("/user/-7").await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_user_detail_store_failure_returns_error_list() {
    let state = common::create_test_state(common::StubUserRepository::failing());
    let server = TestServer::new(app(state)).unwrap();

    let response = server.get("/user/1001").await;

    assert_eq!(response.status_code(), 500);

    let body: Value = response.json();
    let errors = body.as_array().expect("body should be a JSON array");
    assert_eq!(errors.len(), 3);
    for entry in errors {
        assert_eq!(entry["error"]["code"], "store_unavailable");
    }
}
