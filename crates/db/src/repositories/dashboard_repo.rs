//! Aggregate queries over `inspection_tasks` for dashboard and analytics
//! views.
//!
//! Everything here reads current store contents at request time;
//! read-committed visibility with concurrent writers is acceptable (these
//! are analytics views, not a ledger). Derived math lives in
//! `scopetrack_core::analytics` / `forecast`.

use sqlx::PgPool;

use scopetrack_core::status::TaskStatus;

use crate::models::dashboard::{
    DashboardSummary, InspectorCountRow, MethodCountRow, SiteCountRow, SiteStatusCountRow,
};
use crate::repositories::task_repo::overdue_condition;

/// `status IN (completed set)` fragment shared by the aggregates.
fn completed_in_list() -> String {
    let statuses: Vec<String> = TaskStatus::COMPLETED
        .iter()
        .map(|s| format!("'{}'", s.as_str()))
        .collect();
    format!("status IN ({})", statuses.join(", "))
}

/// Provides aggregate count queries for dashboards, forecasts, and reports.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Store-wide summary counts.
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE status = '{claimed}') AS claimed, \
                    COUNT(*) FILTER (WHERE {completed}) AS completed, \
                    COUNT(*) FILTER (WHERE status = '{pending}') AS pending, \
                    COUNT(*) FILTER (WHERE {overdue}) AS overdue \
             FROM inspection_tasks",
            claimed = TaskStatus::Claimed.as_str(),
            completed = completed_in_list(),
            pending = TaskStatus::UnInitiated.as_str(),
            overdue = overdue_condition(),
        );
        sqlx::query_as::<_, DashboardSummary>(&query)
            .fetch_one(pool)
            .await
    }

    /// Per-site total/completed counts for non-empty sites.
    pub async fn site_counts(pool: &PgPool) -> Result<Vec<SiteCountRow>, sqlx::Error> {
        let query = format!(
            "SELECT site, \
                    COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE {completed}) AS completed \
             FROM inspection_tasks \
             WHERE site <> '' \
             GROUP BY site",
            completed = completed_in_list(),
        );
        sqlx::query_as::<_, SiteCountRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Per-inspector workload counts. The unassigned buckets are filtered
    /// out downstream by `analytics::inspector_performance`.
    pub async fn inspector_counts(pool: &PgPool) -> Result<Vec<InspectorCountRow>, sqlx::Error> {
        let query = format!(
            "SELECT inspector, \
                    COUNT(*) AS total_assigned, \
                    COUNT(*) FILTER (WHERE {completed}) AS completed, \
                    COUNT(*) FILTER (WHERE status = '{claimed}') AS in_progress \
             FROM inspection_tasks \
             GROUP BY inspector",
            completed = completed_in_list(),
            claimed = TaskStatus::Claimed.as_str(),
        );
        sqlx::query_as::<_, InspectorCountRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Full per-site status breakdown, used by forecasting and report
    /// generation. Ordered by site for deterministic output.
    pub async fn site_status_counts(pool: &PgPool) -> Result<Vec<SiteStatusCountRow>, sqlx::Error> {
        let query = format!(
            "SELECT site, \
                    COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE {completed}) AS completed, \
                    COUNT(*) FILTER (WHERE status = '{claimed}') AS in_progress, \
                    COUNT(*) FILTER (WHERE status = '{pending}') AS pending, \
                    COUNT(*) FILTER (WHERE {overdue}) AS overdue \
             FROM inspection_tasks \
             WHERE site <> '' \
             GROUP BY site \
             ORDER BY site ASC",
            completed = completed_in_list(),
            claimed = TaskStatus::Claimed.as_str(),
            pending = TaskStatus::UnInitiated.as_str(),
            overdue = overdue_condition(),
        );
        sqlx::query_as::<_, SiteStatusCountRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Per-method counts for the process-performance view.
    pub async fn method_counts(pool: &PgPool) -> Result<Vec<MethodCountRow>, sqlx::Error> {
        let query = format!(
            "SELECT method, \
                    COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE {completed}) AS completed \
             FROM inspection_tasks \
             WHERE method <> '' \
             GROUP BY method \
             ORDER BY total DESC",
            completed = completed_in_list(),
        );
        sqlx::query_as::<_, MethodCountRow>(&query)
            .fetch_all(pool)
            .await
    }
}
