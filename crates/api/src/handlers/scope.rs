//! Handlers for scope upload ingestion and review.
//!
//! Spreadsheet parsing happens upstream; the upload endpoint takes
//! already-parsed rows as JSON. Row normalization failures are skipped and
//! reported, never fatal to the batch.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use scopetrack_core::error::CoreError;
use scopetrack_core::ingest::{normalize_batch, RowFailure};
use scopetrack_core::types::DbId;
use scopetrack_db::models::scope_upload::{ReviewScope, ScopeUpload, UploadScope, UploadStatus};
use scopetrack_db::repositories::{ScopeUploadRepo, TaskRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `POST /api/scope/upload`.
#[derive(Debug, Serialize)]
pub struct UploadOutcome {
    pub upload: ScopeUpload,
    pub records_processed: usize,
    pub records_failed: usize,
    pub failures: Vec<RowFailure>,
}

/// POST /api/scope/upload
///
/// Ingest one batch of scope rows. Good rows are bulk-inserted in a single
/// transaction; the batch is recorded in `pending_review`.
pub async fn upload_scope(
    State(state): State<AppState>,
    Json(input): Json<UploadScope>,
) -> AppResult<impl IntoResponse> {
    if input.filename.trim().is_empty() {
        return Err(CoreError::validation("filename must not be empty").into());
    }
    if input.uploaded_by.trim().is_empty() {
        return Err(CoreError::validation("uploaded_by must not be empty").into());
    }
    if input.rows.is_empty() {
        return Err(CoreError::validation("upload contains no rows").into());
    }

    let batch = normalize_batch(input.rows);
    if !batch.tasks.is_empty() {
        TaskRepo::bulk_insert(&state.pool, &batch.tasks).await?;
    }

    let upload = ScopeUploadRepo::create(
        &state.pool,
        &input.filename,
        &input.uploaded_by,
        batch.tasks.len() as i32,
    )
    .await?;

    tracing::info!(
        upload_id = upload.id,
        filename = %upload.filename,
        processed = batch.tasks.len(),
        failed = batch.failures.len(),
        "Scope upload ingested"
    );

    Ok(Json(DataResponse {
        data: UploadOutcome {
            upload,
            records_processed: batch.tasks.len(),
            records_failed: batch.failures.len(),
            failures: batch.failures,
        },
    }))
}

/// PUT /api/scope/review/{id}
///
/// Record a review outcome for an upload. Only `processed`, `approved`,
/// and `rejected` are valid outcomes.
pub async fn review_scope(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewScope>,
) -> AppResult<impl IntoResponse> {
    let status: UploadStatus = input.status.parse()?;
    if !status.is_review_outcome() {
        return Err(
            CoreError::validation("review status must be processed, approved, or rejected").into(),
        );
    }

    let upload = ScopeUploadRepo::review(&state.pool, id, status, input.review_notes.as_deref())
        .await?
        .ok_or_else(|| CoreError::not_found("scope upload", id))?;

    tracing::info!(upload_id = id, status = %status, "Scope upload reviewed");
    Ok(Json(DataResponse { data: upload }))
}

/// GET /api/scope/uploads
///
/// Recent upload batches, newest first.
pub async fn list_uploads(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let uploads = ScopeUploadRepo::list(&state.pool, 50).await?;
    Ok(Json(DataResponse { data: uploads }))
}
