//! Core domain entities.
//!
//! - [`TodoItem`] - A persisted todo
//! - [`NewTodo`] - Input for creating a todo
//! - [`UpdateTodo`] - Input for overwriting a todo

pub mod todo;

pub use todo::{NewTodo, TodoItem, UpdateTodo};
