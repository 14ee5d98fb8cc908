//! Task assignment audit records. Append-only: rows are never mutated.

use serde::Serialize;
use sqlx::FromRow;

use scopetrack_core::types::{DbId, Timestamp};

/// A row from the `task_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaskAssignment {
    pub id: DbId,
    pub task_id: DbId,
    pub assigned_by: String,
    pub assigned_to: String,
    pub assigned_at: Timestamp,
    pub notes: Option<String>,
}
