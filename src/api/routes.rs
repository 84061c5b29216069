//! API route configuration.

use crate::api::handlers::{create_link_handler, delete_link_handler, link_stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`        - Create a short link (random or custom code)
/// - `GET    /links/{code}` - Link record with click stats
/// - `DELETE /links/{code}` - Delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route(
            "/links/{code}",
            get(link_stats_handler).delete(delete_link_handler),
        )
}
