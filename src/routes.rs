//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`   - Health check (public)
//! - `/todos*`        - Todo API (access key required when configured)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Access key** - Trigger-level key on the todo routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{access_key, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
pub fn build_router(state: AppState) -> Router {
    let todo_router = api::routes::todo_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        access_key::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .merge(todo_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
