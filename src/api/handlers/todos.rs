//! Handlers for the todo endpoints.
//!
//! Each handler validates its input, performs exactly one data access call
//! and maps the outcome to a status code. Data access failures are logged and
//! answered with `500` and an empty body.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::todo::{TodoItemResponse, TodoListQuery, TodoRequest};
use crate::domain::entities::{NewTodo, UpdateTodo};
use crate::domain::errors::StoreError;
use crate::error::AppError;
use crate::state::AppState;

fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("Invalid todo id: {raw}")))
}

fn parse_body(payload: Result<Json<TodoRequest>, JsonRejection>) -> Result<TodoRequest, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::bad_request(rejection.body_text()))
}

fn store_failure(operation: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |e| {
        tracing::error!(operation, error = %e, "Data access failed");
        AppError::from(e)
    }
}

/// Lists todos, optionally filtered by completion status.
///
/// # Endpoint
///
/// `GET /todos[?completed=true|false]`
///
/// Filter values are case-insensitive; anything else, including a repeated
/// or undecodable query string, lists all todos.
pub async fn list_todos_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<TodoItemResponse>>, AppError> {
    tracing::info!("list_todos processed a request");

    let query = TodoListQuery::from_pairs(query.map(|Query(pairs)| pairs).unwrap_or_default());

    let items = state
        .todos
        .list(query.completed_filter())
        .await
        .map_err(store_failure("list_todos"))?;

    Ok(Json(items.into_iter().map(TodoItemResponse::from).collect()))
}

/// Creates a todo. Any `completed` value in the body is ignored.
///
/// # Endpoint
///
/// `POST /todos`
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON or lacks `text`.
pub async fn create_todo_handler(
    State(state): State<AppState>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    tracing::info!("create_todo processed a request");

    let body = parse_body(payload)?;

    state
        .todos
        .create(NewTodo::new(body.text))
        .await
        .map_err(store_failure("create_todo"))?;

    Ok(StatusCode::CREATED)
}

/// Fetches a single todo.
///
/// # Endpoint
///
/// `GET /todos/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if no todo has this id.
pub async fn get_todo_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<TodoItemResponse>, AppError> {
    tracing::info!("get_todo processed a request");

    let id = parse_id(&id)?;

    let item = state
        .todos
        .find_by_id(id)
        .await
        .map_err(store_failure("get_todo"))?
        .ok_or_else(|| AppError::not_found(format!("Todo {id} not found")))?;

    Ok(Json(item.into()))
}

/// Overwrites the text and completion status of a todo.
///
/// # Endpoint
///
/// `PUT /todos/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer or the body is invalid.
/// Returns 404 if no todo has this id.
pub async fn update_todo_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    tracing::info!("update_todo processed a request");

    let body = parse_body(payload)?;
    let id = parse_id(&id)?;

    let affected = state
        .todos
        .update(
            id,
            UpdateTodo {
                text: body.text,
                completed: body.completed,
            },
        )
        .await
        .map_err(store_failure("update_todo"))?;

    if affected == 0 {
        return Err(AppError::not_found(format!("Todo {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a todo.
///
/// # Endpoint
///
/// `DELETE /todos/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if no todo has this id.
pub async fn delete_todo_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    tracing::info!("delete_todo processed a request");

    let id = parse_id(&id)?;

    let affected = state
        .todos
        .delete(id)
        .await
        .map_err(store_failure("delete_todo"))?;

    if affected == 0 {
        return Err(AppError::not_found(format!("Todo {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}
