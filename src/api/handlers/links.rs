//! Handlers for link management endpoints (create, stats, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "targetUrl": "https://example.com/some/long/path",
///   "code": "launch24"   // optional
/// }
/// ```
///
/// Without a `code`, a random 7-character code is allocated with bounded
/// collision retry. With a `code`, the exact code is used or the request is
/// rejected.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL or malformed custom code.
/// Returns 409 Conflict if the custom code is already taken.
/// Returns 500 Internal Server Error on store failure or allocation exhaustion.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .allocation_service
        .allocate(payload.target_url, payload.code)
        .await?;

    let response = LinkResponse::from_link(link, &state.base_url);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Returns the stored record for a short code, including usage stats.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn link_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.allocation_service.get_link(&code).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// The mapping is removed permanently; subsequent redirects for this code
/// return 404. A resolution already past its lookup when the delete lands
/// still redirects, but its stats update becomes a no-op.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or was already deleted.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.allocation_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
