//! Handlers for the read-only lookup lists feeding selection inputs.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use scopetrack_db::repositories::LookupRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/lookups/inspectors
pub async fn list_inspectors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let inspectors = LookupRepo::list_inspectors(&state.pool).await?;
    Ok(Json(DataResponse { data: inspectors }))
}

/// GET /api/lookups/sites
pub async fn list_sites(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sites = LookupRepo::list_sites(&state.pool).await?;
    Ok(Json(DataResponse { data: sites }))
}

/// GET /api/lookups/methods
pub async fn list_methods(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let methods = LookupRepo::list_methods(&state.pool).await?;
    Ok(Json(DataResponse { data: methods }))
}

/// GET /api/lookups/status-types
pub async fn list_status_types(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let status_types = LookupRepo::list_status_types(&state.pool).await?;
    Ok(Json(DataResponse { data: status_types }))
}
