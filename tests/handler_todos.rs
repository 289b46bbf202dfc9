mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use todo_api::api::dto::todo::TodoItemResponse;

async fn create(server: &TestServer, text: &str) {
    server
        .post("/todos")
        .json(&json!({ "text": text }))
        .await
        .assert_status(StatusCode::CREATED);
}

async fn list(server: &TestServer, completed: Option<&str>) -> Vec<TodoItemResponse> {
    let mut request = server.get("/todos");
    if let Some(value) = completed {
        request = request.add_query_param("completed", value);
    }

    let response = request.await;
    response.assert_status_ok();
    response.json::<Vec<TodoItemResponse>>()
}

// ─── SCENARIO ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_full_lifecycle() {
    let server = common::memory_server();

    create(&server, "buy milk").await;

    let response = server.get("/todos").await;
    response.assert_status_ok();
    assert_eq!(
        response.header("content-type").to_str().unwrap(),
        "application/json"
    );
    response.assert_json(&json!([{ "id": 1, "todo": "buy milk", "completed": false }]));

    server
        .put("/todos/1")
        .json(&json!({ "text": "buy milk", "completed": true }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/todos/1").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "id": 1, "todo": "buy milk", "completed": true }));

    server
        .delete("/todos/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server.get("/todos/1").await.assert_status_not_found();
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty_is_array() {
    let server = common::memory_server();

    let response = server.get("/todos").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_list_filter_partitions_items() {
    let server = common::memory_server();

    for text in ["a", "b", "c", "d"] {
        create(&server, text).await;
    }
    for id in [2, 4] {
        server
            .put(&format!("/todos/{id}"))
            .json(&json!({ "text": "done", "completed": true }))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    let done = list(&server, Some("true")).await;
    let open = list(&server, Some("FALSE")).await;
    let all = list(&server, None).await;

    assert!(done.iter().all(|t| t.completed));
    assert!(open.iter().all(|t| !t.completed));
    assert_eq!(done.len(), 2);
    assert_eq!(open.len(), 2);

    let mut union: Vec<i32> = done.iter().chain(open.iter()).map(|t| t.id).collect();
    union.sort_unstable();
    let all_ids: Vec<i32> = all.iter().map(|t| t.id).collect();
    assert_eq!(union, all_ids);
}

#[tokio::test]
async fn test_list_unrecognized_filter_returns_all() {
    let server = common::memory_server();

    create(&server, "a").await;
    create(&server, "b").await;

    assert_eq!(list(&server, Some("yes")).await.len(), 2);
}

#[tokio::test]
async fn test_list_repeated_filter_returns_all() {
    let server = common::memory_server();

    create(&server, "a").await;
    create(&server, "b").await;
    server
        .put("/todos/2")
        .json(&json!({ "text": "b", "completed": true }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    for uri in [
        "/todos?completed=true&completed=false",
        "/todos?completed=true&completed=true",
    ] {
        let response = server.get(uri).await;

        response.assert_status_ok();
        let items = response.json::<Vec<TodoItemResponse>>();
        let ids: Vec<i32> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_forces_open() {
    let server = common::memory_server();

    server
        .post("/todos")
        .json(&json!({ "text": "already done?", "completed": true }))
        .await
        .assert_status(StatusCode::CREATED);

    let items = list(&server, None).await;
    assert_eq!(items.len(), 1);
    assert!(!items[0].completed);
    assert_eq!(items[0].todo, "already done?");
}

#[tokio::test]
async fn test_create_malformed_json() {
    let server = common::memory_server();

    let response = server
        .post("/todos")
        .bytes(Bytes::from_static(b"{\"text\": "))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(list(&server, None).await.is_empty());
}

#[tokio::test]
async fn test_create_missing_text() {
    let server = common::memory_server();

    server
        .post("/todos")
        .json(&json!({ "completed": false }))
        .await
        .assert_status_bad_request();
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_round_trip() {
    let server = common::memory_server();

    create(&server, "walk the dog").await;
    let created = list(&server, None).await.remove(0);

    let fetched = server
        .get(&format!("/todos/{}", created.id))
        .await
        .json::<TodoItemResponse>();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_non_numeric_id() {
    let server = common::memory_server();

    server.get("/todos/abc").await.assert_status_bad_request();
}

#[tokio::test]
async fn test_get_missing_id() {
    let server = common::memory_server();

    let response = server.get("/todos/999999").await;

    response.assert_status_not_found();
    assert!(response.text().is_empty());
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_is_idempotent() {
    let server = common::memory_server();
    create(&server, "draft").await;

    for _ in 0..2 {
        server
            .put("/todos/1")
            .json(&json!({ "text": "final", "completed": true }))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    let response = server.get("/todos/1").await;
    response.assert_json(&json!({ "id": 1, "todo": "final", "completed": true }));
}

#[tokio::test]
async fn test_update_missing_id() {
    let server = common::memory_server();

    server
        .put("/todos/999999")
        .json(&json!({ "text": "ghost", "completed": false }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_update_bad_id() {
    let server = common::memory_server();

    server
        .put("/todos/1x")
        .json(&json!({ "text": "ghost", "completed": false }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_update_accepts_wire_shape() {
    let server = common::memory_server();
    create(&server, "draft").await;

    let mut item: Value = server.get("/todos/1").await.json();
    item["completed"] = json!(true);

    server
        .put("/todos/1")
        .json(&item)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let updated = server.get("/todos/1").await.json::<TodoItemResponse>();
    assert!(updated.completed);
    assert_eq!(updated.todo, "draft");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_twice() {
    let server = common::memory_server();
    create(&server, "temp").await;

    server
        .delete("/todos/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.delete("/todos/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_bad_id() {
    let server = common::memory_server();

    server.delete("/todos/one").await.assert_status_bad_request();
}
