//! Health check handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::state::AppState;

/// GET /api/health
///
/// Liveness plus a database round-trip. Always 200; `db_healthy` reports
/// whether the store answered.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = scopetrack_db::health_check(&state.pool).await.is_ok();
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "db_healthy": db_healthy,
    }))
}
