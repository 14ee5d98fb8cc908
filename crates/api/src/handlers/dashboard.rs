//! Handler for the dashboard overview: summary counts, per-site progress,
//! inspector performance, and recent activity, all computed from current
//! store contents at request time.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use scopetrack_core::analytics::{
    inspector_performance, site_progress, InspectorCounts, InspectorPerformance, SiteCounts,
    SiteProgress,
};
use scopetrack_db::models::dashboard::DashboardSummary;
use scopetrack_db::models::task::InspectionTask;
use scopetrack_db::repositories::{DashboardRepo, TaskRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Recent-activity window in hours.
const ACTIVITY_WINDOW_HOURS: i64 = 24;
/// Cap on recent-activity rows.
const ACTIVITY_LIMIT: i64 = 10;

/// Response body for `GET /api/dashboard/overview`.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub summary: DashboardSummary,
    pub site_progress: Vec<SiteProgress>,
    pub inspector_performance: Vec<InspectorPerformance>,
    pub recent_activity: Vec<InspectionTask>,
}

/// GET /api/dashboard/overview
pub async fn overview(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = DashboardRepo::summary(&state.pool).await?;

    let sites = DashboardRepo::site_counts(&state.pool)
        .await?
        .into_iter()
        .map(|row| SiteCounts {
            site: row.site,
            total: row.total,
            completed: row.completed,
        })
        .collect();

    let inspectors = DashboardRepo::inspector_counts(&state.pool)
        .await?
        .into_iter()
        .map(|row| InspectorCounts {
            inspector: row.inspector,
            total_assigned: row.total_assigned,
            completed: row.completed,
            in_progress: row.in_progress,
        })
        .collect();

    let recent_activity =
        TaskRepo::recent_activity(&state.pool, ACTIVITY_WINDOW_HOURS, ACTIVITY_LIMIT).await?;

    Ok(Json(DataResponse {
        data: DashboardOverview {
            summary,
            site_progress: site_progress(sites),
            inspector_performance: inspector_performance(inspectors),
            recent_activity,
        },
    }))
}
