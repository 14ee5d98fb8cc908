//! Handlers for progress report snapshots.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use scopetrack_core::analytics::completion_rate_pct;
use scopetrack_core::error::CoreError;
use scopetrack_core::types::DbId;
use scopetrack_db::models::report::{
    GenerateReport, ProgressReport, ProgressReportSite, SiteSnapshot,
};
use scopetrack_db::repositories::{DashboardRepo, ReportRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for report generation and retrieval.
#[derive(Debug, Serialize)]
pub struct ReportWithSites {
    pub report: ProgressReport,
    pub sites: Vec<ProgressReportSite>,
}

/// POST /api/reports/generate
///
/// Snapshot per-site progress from the live store and persist it.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(input): Json<GenerateReport>,
) -> AppResult<impl IntoResponse> {
    let generated_by = input.generated_by.as_deref().unwrap_or("System");

    let snapshots: Vec<SiteSnapshot> = DashboardRepo::site_status_counts(&state.pool)
        .await?
        .into_iter()
        .map(|row| SiteSnapshot {
            completion_rate: completion_rate_pct(row.completed, row.total),
            site: row.site,
            total_tasks: row.total,
            completed_tasks: row.completed,
            in_progress_tasks: row.in_progress,
            overdue_tasks: row.overdue,
        })
        .collect();

    let (report, sites) = ReportRepo::create(&state.pool, generated_by, &snapshots).await?;
    tracing::info!(
        report_id = report.id,
        generated_by = %generated_by,
        sites = sites.len(),
        "Progress report generated"
    );

    Ok(Json(DataResponse {
        data: ReportWithSites { report, sites },
    }))
}

/// GET /api/reports
///
/// Recent report headers, newest first.
pub async fn list_reports(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let reports = ReportRepo::list(&state.pool, 50).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// GET /api/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let report = ReportRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("report", id))?;
    let sites = ReportRepo::sites_for_report(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ReportWithSites { report, sites },
    }))
}
