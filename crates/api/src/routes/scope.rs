//! Route definitions for scope upload ingestion and review.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::scope;
use crate::state::AppState;

/// Scope routes mounted at `/scope`.
///
/// ```text
/// POST /upload        -> upload_scope
/// PUT  /review/{id}   -> review_scope
/// GET  /uploads       -> list_uploads
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(scope::upload_scope))
        .route("/review/{id}", put(scope::review_scope))
        .route("/uploads", get(scope::list_uploads))
}
