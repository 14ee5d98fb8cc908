//! Route definitions for inspection tasks.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task routes mounted at `/tasks`.
///
/// ```text
/// GET  /                   -> list_tasks
/// POST /assign             -> assign_task
/// GET  /{id}               -> get_task
/// POST /{id}/claim         -> claim_task
/// PUT  /{id}/update        -> update_task
/// GET  /{id}/assignments   -> list_task_assignments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks))
        .route("/assign", post(tasks::assign_task))
        .route("/{id}", get(tasks::get_task))
        .route("/{id}/claim", post(tasks::claim_task))
        .route("/{id}/update", put(tasks::update_task))
        .route("/{id}/assignments", get(tasks::list_task_assignments))
}
