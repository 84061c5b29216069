//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`  - Short link redirect (public)
//! - `GET  /health`  - Liveness check (public)
//! - `/api/*`        - Link management REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}
