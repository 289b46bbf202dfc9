use std::sync::Arc;

use crate::domain::repositories::TodoRepository;

/// Shared state injected into every handler.
///
/// Holds no per-request data; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
    /// Trigger-level key gating the `/todos` routes. `None` leaves them open.
    pub access_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self {
            todos,
            access_key: None,
        }
    }

    pub fn with_access_key(mut self, key: Option<String>) -> Self {
        self.access_key = key.map(Arc::from);
        self
    }
}
