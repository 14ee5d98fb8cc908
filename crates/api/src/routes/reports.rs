//! Route definitions for progress report snapshots.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes mounted at `/reports`.
///
/// ```text
/// GET  /           -> list_reports
/// POST /generate   -> generate_report
/// GET  /{id}       -> get_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reports::list_reports))
        .route("/generate", post(reports::generate_report))
        .route("/{id}", get(reports::get_report))
}
