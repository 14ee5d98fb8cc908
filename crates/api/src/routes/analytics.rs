//! Route definitions for the analytics views.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Analytics routes mounted at `/analytics`.
///
/// ```text
/// GET /process-performance  -> process_performance
/// GET /predictive-insights  -> predictive_insights
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/process-performance", get(analytics::process_performance))
        .route("/predictive-insights", get(analytics::predictive_insights))
}
