//! HTTP server initialization and runtime setup.
//!
//! Builds the data access component from configuration, applies migrations and
//! runs the Axum server until a shutdown signal arrives.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::TodoRepository;
use crate::infrastructure::persistence::{MIGRATOR, MemoryTodoRepository, PgTodoRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Creates the data access component selected by `config.store_backend`.
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn TodoRepository>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");

            if config.run_migrations {
                MIGRATOR
                    .run(&pool)
                    .await
                    .context("Failed to apply migrations")?;
                tracing::info!("Migrations applied");
            }

            Ok(Arc::new(PgTodoRepository::new(Arc::new(pool))))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; todos are lost on restart");
            Ok(Arc::new(MemoryTodoRepository::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be initialized
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let todos = build_repository(&config).await?;

    let state = AppState::new(todos).with_access_key(config.access_key.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
