//! In-memory implementation of the todo repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewTodo, TodoItem, UpdateTodo};
use crate::domain::errors::StoreError;
use crate::domain::repositories::TodoRepository;

/// Process-local todo storage.
///
/// Ids are handed out sequentially starting at 1, mirroring a `SERIAL`
/// column. Contents are lost when the process exits.
pub struct MemoryTodoRepository {
    inner: RwLock<MemoryState>,
}

struct MemoryState {
    items: BTreeMap<i32, TodoItem>,
    next_id: i32,
}

impl MemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryState {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for MemoryTodoRepository {
    async fn list(&self, completed: Option<bool>) -> Result<Vec<TodoItem>, StoreError> {
        let state = self.inner.read().await;

        Ok(state
            .items
            .values()
            .filter(|item| completed.is_none_or(|c| item.completed == c))
            .cloned()
            .collect())
    }

    async fn create(&self, new_todo: NewTodo) -> Result<u64, StoreError> {
        let mut state = self.inner.write().await;

        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("id sequence exhausted".to_string()))?;
        state
            .items
            .insert(id, TodoItem::new(id, new_todo.text, false));

        Ok(1)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<TodoItem>, StoreError> {
        let state = self.inner.read().await;
        Ok(state.items.get(&id).cloned())
    }

    async fn update(&self, id: i32, update: UpdateTodo) -> Result<u64, StoreError> {
        let mut state = self.inner.write().await;

        match state.items.get_mut(&id) {
            Some(item) => {
                item.text = update.text;
                item.completed = update.completed;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let mut state = self.inner.write().await;
        Ok(u64::from(state.items.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
