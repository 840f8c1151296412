//! Health check endpoints.
//!
//! - `/health` - Status plus a description of the configured database
//! - `/healthz` - Minimal liveness probe for orchestrators

use axum::{extract::State, Json};

use todo_core::health::HealthResponse;

use crate::state::AppState;

/// GET /health - Service status with database description.
///
/// The description is computed at startup; this handler never touches storage.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy().with_database(state.database_info.as_ref().clone()))
}

/// GET /healthz - Liveness probe.
#[axum::debug_handler]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
