//! API route configuration.

use crate::api::handlers::{
    create_todo_handler, delete_todo_handler, get_todo_handler, list_todos_handler,
    update_todo_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Todo routes.
///
/// # Endpoints
///
/// - `GET    /todos`        - List todos (`?completed=true|false`)
/// - `POST   /todos`        - Create a todo
/// - `GET    /todos/{id}`   - Fetch a todo
/// - `PUT    /todos/{id}`   - Overwrite a todo
/// - `DELETE /todos/{id}`   - Delete a todo
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos_handler).post(create_todo_handler))
        .route(
            "/todos/{id}",
            get(get_todo_handler)
                .put(update_todo_handler)
                .delete(delete_todo_handler),
        )
}
