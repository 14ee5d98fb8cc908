//! Repository for persisted progress report snapshots.

use sqlx::PgPool;

use scopetrack_core::types::DbId;

use crate::models::report::{ProgressReport, ProgressReportSite, SiteSnapshot};

/// Column list for `progress_reports` queries.
const REPORT_COLUMNS: &str = "id, report_date, generated_by, created_at";
/// Column list for `progress_report_sites` queries.
const SITE_COLUMNS: &str = "id, report_id, site, total_tasks, completed_tasks, \
    in_progress_tasks, overdue_tasks, completion_rate";

/// Persists and reads progress report snapshots.
pub struct ReportRepo;

impl ReportRepo {
    /// Persist a report header plus its per-site rows in one transaction.
    pub async fn create(
        pool: &PgPool,
        generated_by: &str,
        sites: &[SiteSnapshot],
    ) -> Result<(ProgressReport, Vec<ProgressReportSite>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let header_query = format!(
            "INSERT INTO progress_reports (report_date, generated_by) \
             VALUES (CURRENT_DATE, $1) \
             RETURNING {REPORT_COLUMNS}"
        );
        let report = sqlx::query_as::<_, ProgressReport>(&header_query)
            .bind(generated_by)
            .fetch_one(&mut *tx)
            .await?;

        let site_query = format!(
            "INSERT INTO progress_report_sites \
             (report_id, site, total_tasks, completed_tasks, in_progress_tasks, \
              overdue_tasks, completion_rate) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {SITE_COLUMNS}"
        );
        let mut rows = Vec::with_capacity(sites.len());
        for snapshot in sites {
            let row = sqlx::query_as::<_, ProgressReportSite>(&site_query)
                .bind(report.id)
                .bind(&snapshot.site)
                .bind(snapshot.total_tasks)
                .bind(snapshot.completed_tasks)
                .bind(snapshot.in_progress_tasks)
                .bind(snapshot.overdue_tasks)
                .bind(snapshot.completion_rate)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }

        tx.commit().await?;
        Ok((report, rows))
    }

    /// Find a report header by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProgressReport>, sqlx::Error> {
        let query = format!("SELECT {REPORT_COLUMNS} FROM progress_reports WHERE id = $1");
        sqlx::query_as::<_, ProgressReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Recent report headers, newest first.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<ProgressReport>, sqlx::Error> {
        let query = format!(
            "SELECT {REPORT_COLUMNS} FROM progress_reports \
             ORDER BY created_at DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, ProgressReport>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Site rows for a report, by site.
    pub async fn sites_for_report(
        pool: &PgPool,
        report_id: DbId,
    ) -> Result<Vec<ProgressReportSite>, sqlx::Error> {
        let query = format!(
            "SELECT {SITE_COLUMNS} FROM progress_report_sites \
             WHERE report_id = $1 \
             ORDER BY site ASC"
        );
        sqlx::query_as::<_, ProgressReportSite>(&query)
            .bind(report_id)
            .fetch_all(pool)
            .await
    }
}
