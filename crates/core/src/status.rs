//! Task status lifecycle and the overdue predicate.
//!
//! The nominal flow is `UnInitiated -> Claimed -> FieldComplete -> Reported`,
//! with `OutOfService` and `RT-ProfileCrew` reachable from any active state.
//! Status *values* are validated (an unknown string is rejected), but the
//! transition graph is deliberately not enforced: field crews move tasks
//! backwards on rework, so any valid status may overwrite any other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DateOnly;

/// Lifecycle status of an inspection task.
///
/// Serialized forms match the tracker spreadsheet's status column and are
/// stored verbatim in the `status` TEXT column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    UnInitiated,
    Claimed,
    FieldComplete,
    Reported,
    OutOfService,
    #[serde(rename = "RT-ProfileCrew")]
    RtProfileCrew,
}

impl TaskStatus {
    /// Statuses that count as completed for analytics and the overdue
    /// predicate.
    pub const COMPLETED: [TaskStatus; 2] = [TaskStatus::FieldComplete, TaskStatus::Reported];

    /// Every valid status, in lifecycle order.
    pub const ALL: [TaskStatus; 6] = [
        TaskStatus::UnInitiated,
        TaskStatus::Claimed,
        TaskStatus::FieldComplete,
        TaskStatus::Reported,
        TaskStatus::OutOfService,
        TaskStatus::RtProfileCrew,
    ];

    /// The stable wire/storage string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnInitiated => "UnInitiated",
            Self::Claimed => "Claimed",
            Self::FieldComplete => "FieldComplete",
            Self::Reported => "Reported",
            Self::OutOfService => "OutOfService",
            Self::RtProfileCrew => "RT-ProfileCrew",
        }
    }

    /// Whether this status counts as completed.
    pub fn is_completed(self) -> bool {
        Self::COMPLETED.contains(&self)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::validation(format!("unknown task status: {s:?}")))
    }
}

// Required by sqlx's `#[sqlx(try_from = "String")]` column decoding.
impl TryFrom<String> for TaskStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Single source of truth for overdue detection.
///
/// A task is overdue iff its due date has passed and it is not completed.
/// Tasks without a due date are never overdue. The SQL used for overdue
/// counts is built from [`TaskStatus::COMPLETED`] so both sides agree.
pub fn is_overdue(status: TaskStatus, due_date: Option<DateOnly>, today: DateOnly) -> bool {
    match due_date {
        Some(due) => due < today && !status.is_completed(),
        None => false,
    }
}
