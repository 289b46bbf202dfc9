//! Repository trait for todo data access.

use crate::domain::entities::{NewTodo, TodoItem, UpdateTodo};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Data access contract for todo items.
///
/// Every operation yields either a value or a [`StoreError`], never both.
/// "No such row" is a value: `Ok(None)` for lookups and `Ok(0)` for writes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTodoRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryTodoRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists todos ordered by id.
    ///
    /// # Arguments
    ///
    /// - `completed` - If set, returns only todos with that completion status
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on store failures.
    async fn list(&self, completed: Option<bool>) -> Result<Vec<TodoItem>, StoreError>;

    /// Inserts a new open todo and returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on store failures.
    async fn create(&self, new_todo: NewTodo) -> Result<u64, StoreError>;

    /// Finds a todo by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(TodoItem))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on store failures.
    async fn find_by_id(&self, id: i32) -> Result<Option<TodoItem>, StoreError>;

    /// Overwrites text and completion status of an existing todo.
    ///
    /// Returns the affected-row count, `0` when no todo has this id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on store failures.
    async fn update(&self, id: i32, update: UpdateTodo) -> Result<u64, StoreError>;

    /// Removes a todo.
    ///
    /// Returns the affected-row count, `0` when no todo has this id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on store failures.
    async fn delete(&self, id: i32) -> Result<u64, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
