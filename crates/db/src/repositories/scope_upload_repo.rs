//! Repository for the `scope_uploads` table.

use sqlx::PgPool;

use scopetrack_core::types::DbId;

use crate::models::scope_upload::{ScopeUpload, UploadStatus};

/// Column list for `scope_uploads` queries.
const COLUMNS: &str = "id, filename, upload_date, uploaded_by, status, records_count, review_notes";

/// Provides CRUD operations for scope upload batches.
pub struct ScopeUploadRepo;

impl ScopeUploadRepo {
    /// Record a new upload batch in `pending_review`, returning the row.
    pub async fn create(
        pool: &PgPool,
        filename: &str,
        uploaded_by: &str,
        records_count: i32,
    ) -> Result<ScopeUpload, sqlx::Error> {
        let query = format!(
            "INSERT INTO scope_uploads (filename, uploaded_by, status, records_count) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScopeUpload>(&query)
            .bind(filename)
            .bind(uploaded_by)
            .bind(UploadStatus::PendingReview.as_str())
            .bind(records_count)
            .fetch_one(pool)
            .await
    }

    /// Find an upload by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ScopeUpload>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scope_uploads WHERE id = $1");
        sqlx::query_as::<_, ScopeUpload>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a review outcome, returning the updated row.
    ///
    /// Returns `None` if the upload does not exist. Callers validate that
    /// `status` is a review outcome before getting here.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        status: UploadStatus,
        review_notes: Option<&str>,
    ) -> Result<Option<ScopeUpload>, sqlx::Error> {
        let query = format!(
            "UPDATE scope_uploads \
             SET status = $2, review_notes = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ScopeUpload>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(review_notes)
            .fetch_optional(pool)
            .await
    }

    /// List uploads, newest first.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<ScopeUpload>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scope_uploads \
             ORDER BY upload_date DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, ScopeUpload>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
