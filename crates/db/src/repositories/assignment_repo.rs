//! Repository for the `task_assignments` audit table. Append-only.

use sqlx::PgPool;

use scopetrack_core::types::DbId;

use crate::models::assignment::TaskAssignment;

/// Column list for `task_assignments` queries.
const COLUMNS: &str = "id, task_id, assigned_by, assigned_to, assigned_at, notes";

/// Records who assigned which task to whom. Rows are never updated.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Append an assignment audit row, returning it.
    pub async fn create(
        pool: &PgPool,
        task_id: DbId,
        assigned_by: &str,
        assigned_to: &str,
        notes: Option<&str>,
    ) -> Result<TaskAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_assignments (task_id, assigned_by, assigned_to, notes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskAssignment>(&query)
            .bind(task_id)
            .bind(assigned_by)
            .bind(assigned_to)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Assignment history for a task, newest first.
    pub async fn list_for_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Vec<TaskAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM task_assignments \
             WHERE task_id = $1 \
             ORDER BY assigned_at DESC"
        );
        sqlx::query_as::<_, TaskAssignment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }
}
