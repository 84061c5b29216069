//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// Responds `302 Found` with the target in the `Location` header. The click
/// counter and last-click timestamp are updated as a side effect; a failed
/// stats update never turns a resolvable code into an error response.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 Internal Server Error if the store lookup fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.resolution_service.resolve(&code).await?;

    debug!(code, target = %link.target_url, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, link.target_url)]))
}
