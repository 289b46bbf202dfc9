//! HTTP middleware for request processing and protection.

pub mod access_key;
pub mod tracing;
