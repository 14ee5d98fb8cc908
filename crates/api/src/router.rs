//! Top-level router composition.

use axum::Router;

use crate::routes;
use crate::state::AppState;

/// Build the `/api` router with every resource mounted.
///
/// Middleware layers (CORS, tracing, timeouts, request IDs) are applied by
/// the caller so tests can exercise the same stack `main` uses.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::health::router())
        .nest("/tasks", routes::tasks::router())
        .nest("/scope", routes::scope::router())
        .nest("/dashboard", routes::dashboard::router())
        .nest("/analytics", routes::analytics::router())
        .nest("/reports", routes::reports::router())
        .nest("/lookups", routes::lookups::router())
        .nest("/notifications", routes::notifications::router());

    Router::new().nest("/api", api).with_state(state)
}
