//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgTodoRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryTodoRepository`] - Process-local storage for development and tests

pub mod memory_todo_repository;
pub mod pg_todo_repository;

pub use memory_todo_repository::MemoryTodoRepository;
pub use pg_todo_repository::PgTodoRepository;

/// Embedded schema migrations from `./migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
