//! HTTP server initialization and runtime setup.
//!
//! Selects the store backend, applies migrations when PostgreSQL is used,
//! and drives the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// With `DATABASE_URL` set, connects a PostgreSQL pool and applies
/// migrations; otherwise the service runs on the in-process store.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (repository, backend): (Arc<dyn LinkRepository>, &'static str) =
        if let Some(database_url) = &config.database_url {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            (Arc::new(PgLinkRepository::new(Arc::new(pool))), "postgres")
        } else {
            tracing::warn!("DATABASE_URL not set, links will not survive a restart");
            (Arc::new(MemoryLinkRepository::new()), "memory")
        };

    tracing::info!(backend, "Store ready");

    let state = AppState::new(repository, config.base_url.clone(), backend);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
