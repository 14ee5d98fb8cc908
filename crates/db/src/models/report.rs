//! Persisted progress report snapshots.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scopetrack_core::types::{DateOnly, DbId, Timestamp};

/// A row from the `progress_reports` table (report header).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgressReport {
    pub id: DbId,
    pub report_date: DateOnly,
    pub generated_by: String,
    pub created_at: Timestamp,
}

/// A row from the `progress_report_sites` table: one site's snapshot within
/// a report.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgressReportSite {
    pub id: DbId,
    pub report_id: DbId,
    pub site: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub overdue_tasks: i64,
    pub completion_rate: f64,
}

/// Request body for `POST /api/reports/generate`.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReport {
    /// Report author; defaults to "System".
    pub generated_by: Option<String>,
}

/// Per-site figures computed from the live store, before persistence.
#[derive(Debug, Clone)]
pub struct SiteSnapshot {
    pub site: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub overdue_tasks: i64,
    pub completion_rate: f64,
}
