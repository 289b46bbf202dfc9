//! Todo entity.

/// A todo item as stored in the `todos` table.
///
/// `id` is assigned by the store and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: i32, text: String, completed: bool) -> Self {
        Self {
            id,
            text,
            completed,
        }
    }
}

/// Input data for creating a todo.
///
/// There is no `completed` field: new todos always start open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
}

impl NewTodo {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Full replacement of the mutable fields of a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodo {
    pub text: String,
    pub completed: bool,
}
