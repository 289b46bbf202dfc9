//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod todo_repository;

pub use todo_repository::TodoRepository;

#[cfg(test)]
pub use todo_repository::MockTodoRepository;
