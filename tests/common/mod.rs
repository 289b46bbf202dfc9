#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use todo_api::domain::repositories::TodoRepository;
use todo_api::infrastructure::persistence::MemoryTodoRepository;
use todo_api::routes::build_router;
use todo_api::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryTodoRepository::new()))
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

pub fn memory_server() -> TestServer {
    make_server(create_test_state())
}

pub fn server_with_key(key: &str) -> TestServer {
    make_server(create_test_state().with_access_key(Some(key.to_string())))
}

pub fn server_with_repository(repo: Arc<dyn TodoRepository>) -> TestServer {
    make_server(AppState::new(repo))
}
