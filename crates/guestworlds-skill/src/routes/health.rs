//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of changeovers in the loaded schedule.
    pub changeovers: usize,
    /// Offset from UTC, in hours, at which changeovers happen.
    pub cutover_utc_offset_hours: i32,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        changeovers: state.schedule.calendar().len(),
        cutover_utc_offset_hours: state.schedule.calendar().offset().local_minus_utc() / 3600,
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
