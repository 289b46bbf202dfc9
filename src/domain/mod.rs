//! Domain layer containing the todo entity and the data access contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::TodoItem`] and its inputs)
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//! - [`errors`] - Failure type returned by every data access operation
//!
//! The domain layer does not depend on the HTTP or infrastructure layers.
//! [`errors::StoreError`] wraps `sqlx::Error` so database failures keep their
//! source. Handlers talk to storage only through [`repositories::TodoRepository`].

pub mod entities;
pub mod errors;
pub mod repositories;
