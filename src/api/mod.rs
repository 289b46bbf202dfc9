//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into data access calls and maps their
//! outcomes to status codes.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Access key check and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
