mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};

const KEY: &str = "s3cret";

#[tokio::test]
async fn test_no_key_configured_is_open() {
    let server = common::memory_server();

    server.get("/todos").await.assert_status_ok();
}

#[tokio::test]
async fn test_missing_key_rejected() {
    let server = common::server_with_key(KEY);

    let response = server.get("/todos").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_wrong_key_rejected() {
    let server = common::server_with_key(KEY);

    server
        .get("/todos")
        .add_header(
            HeaderName::from_static("x-functions-key"),
            HeaderValue::from_static("nope"),
        )
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_key_in_header() {
    let server = common::server_with_key(KEY);

    server
        .get("/todos")
        .add_header(
            HeaderName::from_static("x-functions-key"),
            HeaderValue::from_static(KEY),
        )
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_key_in_query() {
    let server = common::server_with_key(KEY);

    server
        .get("/todos")
        .add_query_param("code", KEY)
        .add_query_param("completed", "true")
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_key_as_bearer() {
    let server = common::server_with_key(KEY);

    server
        .delete("/todos/1")
        .authorization_bearer(KEY)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_health_not_gated() {
    let server = common::server_with_key(KEY);

    server.get("/health").await.assert_status_ok();
}
