//! Scope upload batches and their review lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scopetrack_core::error::CoreError;
use scopetrack_core::ingest::RawScopeRow;
use scopetrack_core::types::{DbId, Timestamp};

/// Review status of a scope upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    PendingReview,
    Processed,
    Approved,
    Rejected,
}

impl UploadStatus {
    /// The stable wire/storage string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingReview => "pending_review",
            Self::Processed => "processed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Statuses a reviewer may set. `pending_review` is the initial state
    /// and cannot be re-entered.
    pub fn is_review_outcome(self) -> bool {
        !matches!(self, Self::PendingReview)
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_review" => Ok(Self::PendingReview),
            "processed" => Ok(Self::Processed),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(CoreError::validation(format!(
                "unknown upload status: {other:?}"
            ))),
        }
    }
}

impl TryFrom<String> for UploadStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A row from the `scope_uploads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScopeUpload {
    pub id: DbId,
    pub filename: String,
    pub upload_date: Timestamp,
    pub uploaded_by: String,
    #[sqlx(try_from = "String")]
    pub status: UploadStatus,
    pub records_count: i32,
    pub review_notes: Option<String>,
}

/// Request body for `POST /api/scope/upload`.
#[derive(Debug, Deserialize)]
pub struct UploadScope {
    pub filename: String,
    pub uploaded_by: String,
    pub rows: Vec<RawScopeRow>,
}

/// Request body for `PUT /api/scope/review/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReviewScope {
    /// Must be one of `processed`, `approved`, `rejected`.
    pub status: String,
    pub review_notes: Option<String>,
}
