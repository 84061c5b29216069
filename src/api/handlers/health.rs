//! Liveness endpoint.

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::state::AppState;

/// Reports service liveness and the active store backend.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "backend": state.backend,
    }))
}
