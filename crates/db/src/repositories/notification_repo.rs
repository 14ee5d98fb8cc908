//! Repository for the `notifications` table.

use sqlx::PgPool;

use scopetrack_core::types::DbId;

use crate::models::notification::{Notification, NotificationType};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, task_id, message, notification_type, read_status, created_at";

/// Provides append and read-state operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Append a notification, returning the generated ID.
    pub async fn create(
        pool: &PgPool,
        task_id: Option<DbId>,
        notification_type: NotificationType,
        message: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO notifications (task_id, notification_type, message) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(task_id)
        .bind(notification_type.as_str())
        .bind(message)
        .fetch_one(pool)
        .await
    }

    /// List notifications, newest first.
    ///
    /// When `unread_only` is `true`, only notifications with
    /// `read_status = false` are returned.
    pub async fn list(
        pool: &PgPool,
        unread_only: bool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "WHERE read_status = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications {filter} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Mark a notification as read. Idempotent.
    ///
    /// Returns `true` if the notification exists.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE notifications SET read_status = true WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of unread notifications.
    pub async fn unread_count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE read_status = false")
            .fetch_one(pool)
            .await
    }
}
