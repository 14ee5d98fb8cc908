//! Handlers for the analytics views: process performance and predictive
//! insights.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use scopetrack_core::analytics::{
    completion_rate_pct, inspector_performance, site_progress, InspectorCounts,
    InspectorPerformance, SiteCounts, SiteProgress,
};
use scopetrack_core::forecast::{forecast_sites, SiteForecast, SiteTaskCounts};
use scopetrack_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Per-method completion figures for the process-performance view.
#[derive(Debug, Serialize)]
pub struct MethodPerformance {
    pub method: String,
    pub total: i64,
    pub completed: i64,
    pub completion_rate: f64,
}

/// Response body for `GET /api/analytics/process-performance`.
#[derive(Debug, Serialize)]
pub struct ProcessPerformance {
    pub site_progress: Vec<SiteProgress>,
    pub inspector_performance: Vec<InspectorPerformance>,
    pub method_performance: Vec<MethodPerformance>,
}

/// GET /api/analytics/process-performance
pub async fn process_performance(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
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

    let methods = DashboardRepo::method_counts(&state.pool)
        .await?
        .into_iter()
        .map(|row| MethodPerformance {
            completion_rate: completion_rate_pct(row.completed, row.total),
            method: row.method,
            total: row.total,
            completed: row.completed,
        })
        .collect();

    Ok(Json(DataResponse {
        data: ProcessPerformance {
            site_progress: site_progress(sites),
            inspector_performance: inspector_performance(inspectors),
            method_performance: methods,
        },
    }))
}

/// GET /api/analytics/predictive-insights
///
/// Per-site linear completion forecasts with risk tiers.
pub async fn predictive_insights(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let counts: Vec<SiteTaskCounts> = DashboardRepo::site_status_counts(&state.pool)
        .await?
        .into_iter()
        .map(|row| SiteTaskCounts {
            site: row.site,
            total: row.total,
            completed: row.completed,
            in_progress: row.in_progress,
            pending: row.pending,
        })
        .collect();

    let today = Utc::now().date_naive();
    let forecasts: Vec<SiteForecast> = forecast_sites(counts, today);

    Ok(Json(DataResponse { data: forecasts }))
}
