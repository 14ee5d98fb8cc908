//! Handlers for the notification side-channel log.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use scopetrack_core::error::CoreError;
use scopetrack_core::types::DbId;
use scopetrack_db::repositories::NotificationRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default number of notifications returned.
const DEFAULT_LIMIT: i64 = 50;
/// Hard cap on the notification page size.
const MAX_LIMIT: i64 = 200;

/// Query parameters for `GET /api/notifications`.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationParams {
    #[serde(default)]
    pub unread_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// GET /api/notifications?unread_only=&limit=&offset=
///
/// List notifications newest first.
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<NotificationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let notifications =
        NotificationRepo::list(&state.pool, params.unread_only, limit, offset).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = NotificationRepo::unread_count(&state.pool).await?;
    Ok(Json(DataResponse {
        data: json!({ "unread": count }),
    }))
}

/// POST /api/notifications/{id}/read
///
/// Mark a notification as read. Idempotent; 404 for unknown IDs.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NotificationRepo::mark_read(&state.pool, id).await?;
    if !found {
        return Err(CoreError::not_found("notification", id).into());
    }
    Ok(Json(DataResponse {
        data: json!({ "read": true }),
    }))
}
