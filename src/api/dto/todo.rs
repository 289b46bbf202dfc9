//! DTOs for the todo endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::TodoItem;

/// Body of `POST /todos` and `PUT /todos/{id}`.
///
/// `todo` is accepted as an alias of `text` so a previously fetched item can
/// be sent back unchanged. `completed` defaults to `false` and is ignored on
/// create.
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    #[serde(alias = "todo")]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Wire representation of a todo.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItemResponse {
    pub id: i32,
    pub todo: String,
    pub completed: bool,
}

impl From<TodoItem> for TodoItemResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            id: item.id,
            todo: item.text,
            completed: item.completed,
        }
    }
}

/// Query string of `GET /todos`.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListQuery {
    pub completed: Option<String>,
}

impl TodoListQuery {
    /// Builds the query from raw key/value pairs.
    ///
    /// Repeated `completed` parameters are joined with `,`, which never
    /// matches a filter value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "completed")
            .map(|(_, value)| value)
            .collect();

        Self {
            completed: (!values.is_empty()).then(|| values.join(",")),
        }
    }

    /// Case-insensitive `true`/`false`; any other value means no filter.
    pub fn completed_filter(&self) -> Option<bool> {
        let value = self.completed.as_deref()?;

        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}
