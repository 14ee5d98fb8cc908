//! Inspection task entity and its mutation DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scopetrack_core::status::TaskStatus;
use scopetrack_core::types::{DateOnly, DbId, Timestamp};

/// A row from the `inspection_tasks` table.
///
/// `site`, `method`, and `inspector` are free-text snapshots of the lookup
/// values at ingestion time, not foreign keys; historical scope rows may
/// carry values that predate the lookup lists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InspectionTask {
    pub id: DbId,
    pub site: String,
    pub site_project: String,
    pub hierarchy_item_name: String,
    pub description: String,
    pub mechanism: String,
    pub method: String,
    pub extent: String,
    pub frequency: Option<f64>,
    pub interval_type: String,
    pub inspection_priority: Option<i32>,
    pub last_inspection_date: Option<DateOnly>,
    pub install_date: Option<DateOnly>,
    pub due_date: Option<DateOnly>,
    pub current_inspection_date: Option<DateOnly>,
    pub inspector: String,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    pub comments: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Exact-match filters for task listing. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub site: Option<String>,
    pub inspector: Option<String>,
    pub status: Option<TaskStatus>,
    pub method: Option<String>,
    pub inspection_priority: Option<i32>,
}

/// Partial update for a task. Absent fields are left unchanged.
///
/// Only these seven columns may be written through the update operation;
/// everything else is set at ingestion and never edited. A status here may
/// overwrite any current status (validated value, unvalidated transition).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    pub status: Option<TaskStatus>,
    pub method: Option<String>,
    pub inspection_priority: Option<i32>,
    pub current_inspection_date: Option<DateOnly>,
    pub mechanism: Option<String>,
    pub comments: Option<String>,
    pub inspector: Option<String>,
}

impl TaskPatch {
    /// True when the patch would change nothing (rejected with 400).
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.method.is_none()
            && self.inspection_priority.is_none()
            && self.current_inspection_date.is_none()
            && self.mechanism.is_none()
            && self.comments.is_none()
            && self.inspector.is_none()
    }
}

/// Request body for claiming a task.
#[derive(Debug, Deserialize)]
pub struct ClaimTask {
    pub inspector: String,
}

/// Request body for assigning a task to an inspector.
#[derive(Debug, Deserialize)]
pub struct AssignTask {
    pub task_id: DbId,
    pub assigned_to: String,
    /// Recorded in the audit trail; defaults to "System".
    pub assigned_by: Option<String>,
    pub notes: Option<String>,
}
