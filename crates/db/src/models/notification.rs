//! Notification entity: an append-only side-channel log of lifecycle events.

use serde::Serialize;
use sqlx::FromRow;

use scopetrack_core::types::{DbId, Timestamp};

/// Event categories emitted by lifecycle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    TaskClaimed,
    TaskAssignment,
    StatusChange,
}

impl NotificationType {
    /// The stable storage string for this event type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TaskClaimed => "task_claimed",
            Self::TaskAssignment => "task_assignment",
            Self::StatusChange => "status_change",
        }
    }
}

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    /// Task the event relates to, when there is one.
    pub task_id: Option<DbId>,
    pub message: String,
    pub notification_type: String,
    pub read_status: bool,
    pub created_at: Timestamp,
}
