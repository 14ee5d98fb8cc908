//! Handlers for task listing and the claim / assign / update lifecycle
//! operations.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use scopetrack_core::error::CoreError;
use scopetrack_core::paging::Page;
use scopetrack_core::status::TaskStatus;
use scopetrack_core::types::DbId;
use scopetrack_db::models::notification::NotificationType;
use scopetrack_db::models::task::{AssignTask, ClaimTask, InspectionTask, TaskFilter, TaskPatch};
use scopetrack_db::repositories::{AssignmentRepo, NotificationRepo, TaskRepo};
use scopetrack_db::DbPool;

use crate::error::AppResult;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// Query parameters for `GET /api/tasks`: pagination plus the exact-match
/// filter set.
#[derive(Debug, Default, Deserialize)]
pub struct TaskListParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub site: Option<String>,
    pub inspector: Option<String>,
    pub status: Option<TaskStatus>,
    pub method: Option<String>,
    pub inspection_priority: Option<i32>,
}

impl TaskListParams {
    fn filter(&self) -> TaskFilter {
        TaskFilter {
            site: self.site.clone(),
            inspector: self.inspector.clone(),
            status: self.status,
            method: self.method.clone(),
            inspection_priority: self.inspection_priority,
        }
    }
}

/// Response body for `POST /api/tasks/assign`.
#[derive(Debug, Serialize)]
pub struct AssignmentOutcome {
    pub task: InspectionTask,
    pub assignment: scopetrack_db::models::assignment::TaskAssignment,
}

/// Insert a lifecycle notification, logging instead of failing the request:
/// the task write has already committed and the notification log is a
/// side channel.
async fn emit_notification(
    pool: &DbPool,
    task_id: DbId,
    notification_type: NotificationType,
    message: String,
) {
    if let Err(err) = NotificationRepo::create(pool, Some(task_id), notification_type, &message).await
    {
        tracing::warn!(task_id, error = %err, "Failed to record notification");
    }
}

/// GET /api/tasks?site=&inspector=&status=&method=&inspection_priority=&page=&per_page=
///
/// List tasks matching the filters, due date ascending, paginated.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> AppResult<impl IntoResponse> {
    let page = Page::new(params.page, params.per_page)?;
    let (tasks, total) = TaskRepo::list(&state.pool, &params.filter(), page).await?;
    Ok(Json(PagedResponse::new(tasks, page, total)))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("task", id))?;
    Ok(Json(DataResponse { data: task }))
}

/// POST /api/tasks/{id}/claim
///
/// Claim a task for an inspector: status, inspector, and `updated_at`
/// change atomically, then a `task_claimed` notification is emitted.
pub async fn claim_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ClaimTask>,
) -> AppResult<impl IntoResponse> {
    if input.inspector.trim().is_empty() {
        return Err(CoreError::validation("inspector must not be empty").into());
    }

    let task = TaskRepo::claim(&state.pool, id, &input.inspector)
        .await?
        .ok_or_else(|| CoreError::not_found("task", id))?;

    tracing::info!(task_id = id, inspector = %input.inspector, "Task claimed");
    emit_notification(
        &state.pool,
        id,
        NotificationType::TaskClaimed,
        format!("Task {id} claimed by {}", input.inspector),
    )
    .await;

    Ok(Json(DataResponse { data: task }))
}

/// PUT /api/tasks/{id}/update
///
/// Partial update over the editable field set. An empty patch is a 400.
/// When the patch carries a status, a `status_change` notification is
/// emitted with the new value.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(patch): Json<TaskPatch>,
) -> AppResult<impl IntoResponse> {
    if patch.is_empty() {
        return Err(CoreError::validation("update contains no editable fields").into());
    }

    let task = TaskRepo::apply_patch(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| CoreError::not_found("task", id))?;

    tracing::info!(task_id = id, "Task updated");
    if let Some(status) = patch.status {
        emit_notification(
            &state.pool,
            id,
            NotificationType::StatusChange,
            format!("Task {id} status changed to {status}"),
        )
        .await;
    }

    Ok(Json(DataResponse { data: task }))
}

/// POST /api/tasks/assign
///
/// Same store effect as a claim, plus an append-only assignment audit row
/// and a `task_assignment` notification.
pub async fn assign_task(
    State(state): State<AppState>,
    Json(input): Json<AssignTask>,
) -> AppResult<impl IntoResponse> {
    if input.assigned_to.trim().is_empty() {
        return Err(CoreError::validation("assigned_to must not be empty").into());
    }
    let assigned_by = input.assigned_by.as_deref().unwrap_or("System");

    let task = TaskRepo::claim(&state.pool, input.task_id, &input.assigned_to)
        .await?
        .ok_or_else(|| CoreError::not_found("task", input.task_id))?;

    let assignment = AssignmentRepo::create(
        &state.pool,
        input.task_id,
        assigned_by,
        &input.assigned_to,
        input.notes.as_deref(),
    )
    .await?;

    tracing::info!(
        task_id = input.task_id,
        assigned_to = %input.assigned_to,
        assigned_by = %assigned_by,
        "Task assigned"
    );
    emit_notification(
        &state.pool,
        input.task_id,
        NotificationType::TaskAssignment,
        format!(
            "Task {} assigned to {} by {assigned_by}",
            input.task_id, input.assigned_to
        ),
    )
    .await;

    Ok(Json(DataResponse {
        data: AssignmentOutcome { task, assignment },
    }))
}

/// GET /api/tasks/{id}/assignments
///
/// Assignment audit history for a task, newest first.
pub async fn list_task_assignments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 for unknown tasks rather than an empty history.
    TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("task", id))?;

    let assignments = AssignmentRepo::list_for_task(&state.pool, id).await?;
    Ok(Json(DataResponse { data: assignments }))
}
