//! Raw aggregate rows read by the dashboard and analytics queries.
//!
//! These are count inputs only; derived values (rates, orderings, risk
//! tiers) are computed by `scopetrack_core::{analytics, forecast}`.

use serde::Serialize;
use sqlx::FromRow;

/// Store-wide status counts for the dashboard summary.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardSummary {
    pub total: i64,
    pub claimed: i64,
    pub completed: i64,
    pub pending: i64,
    pub overdue: i64,
}

/// Per-site total/completed counts.
#[derive(Debug, Clone, FromRow)]
pub struct SiteCountRow {
    pub site: String,
    pub total: i64,
    pub completed: i64,
}

/// Per-inspector workload counts.
#[derive(Debug, Clone, FromRow)]
pub struct InspectorCountRow {
    pub inspector: String,
    pub total_assigned: i64,
    pub completed: i64,
    pub in_progress: i64,
}

/// Full per-site status breakdown, used by forecasting and report
/// generation.
#[derive(Debug, Clone, FromRow)]
pub struct SiteStatusCountRow {
    pub site: String,
    pub total: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub pending: i64,
    pub overdue: i64,
}

/// Per-method counts for the process-performance view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MethodCountRow {
    pub method: String,
    pub total: i64,
    pub completed: i64,
}
