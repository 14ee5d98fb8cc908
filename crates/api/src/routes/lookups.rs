//! Route definitions for the read-only lookup lists.

use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

/// Lookup routes mounted at `/lookups`.
///
/// ```text
/// GET /inspectors    -> list_inspectors
/// GET /sites         -> list_sites
/// GET /methods       -> list_methods
/// GET /status-types  -> list_status_types
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/inspectors", get(lookups::list_inspectors))
        .route("/sites", get(lookups::list_sites))
        .route("/methods", get(lookups::list_methods))
        .route("/status-types", get(lookups::list_status_types))
}
