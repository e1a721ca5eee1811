//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, migrations, catalog seeding and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::db;
use crate::infrastructure::persistence::SqliteProductRepository;
use crate::infrastructure::seed::{load_catalog, refresh_catalog};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Catalog reseed from the fixture
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The catalog fixture is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = db::connect_with_settings(
        &config.database_url,
        config.pool_size(),
        config.db_connect_timeout,
    )
    .await
    .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let pool = Arc::new(pool);

    let products = load_catalog(config.catalog_path.as_deref())?;
    let product_repository = SqliteProductRepository::new(pool.clone());
    refresh_catalog(&product_repository, products).await?;

    let state = AppState::new(pool, config.cookie_secure);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
