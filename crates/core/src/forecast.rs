//! Per-site completion forecasting.
//!
//! A deliberately simple linear extrapolation: the observed completion rate
//! stands in for weekly throughput, and remaining work is divided by it.
//! This is a planning aid, not a statistical forecast; do not "improve" it.

use chrono::Duration;
use serde::Serialize;

use crate::types::DateOnly;

/// Completion-rate fraction below which a site is high risk.
pub const HIGH_RISK_BELOW: f64 = 0.30;
/// Completion-rate fraction below which a site is medium risk.
pub const MEDIUM_RISK_BELOW: f64 = 0.70;

/// Qualitative risk bucket derived from a site's completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Bucket a completion-rate fraction (0.0..=1.0).
    ///
    /// Boundaries are inclusive on the upper side: exactly 0.30 is medium,
    /// exactly 0.70 is low.
    pub fn from_completion_rate(rate: f64) -> Self {
        if rate < HIGH_RISK_BELOW {
            Self::High
        } else if rate < MEDIUM_RISK_BELOW {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Raw status counts for one site, as read from the task store.
#[derive(Debug, Clone)]
pub struct SiteTaskCounts {
    pub site: String,
    pub total: i64,
    pub completed: i64,
    /// Tasks currently claimed.
    pub in_progress: i64,
    /// Tasks not yet started.
    pub pending: i64,
}

/// Forecast output for one site.
#[derive(Debug, Clone, Serialize)]
pub struct SiteForecast {
    pub site: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub pending_tasks: i64,
    pub remaining_tasks: i64,
    /// Completion-rate fraction in 0.0..=1.0 (not a percentage).
    pub completion_rate: f64,
    /// Projected days to completion; absent when no estimate is possible.
    pub estimated_days: Option<f64>,
    /// `today + estimated_days`, rounded to whole days.
    pub estimated_completion_date: Option<DateOnly>,
    pub risk_level: RiskLevel,
}

/// Forecast a single site from its status counts as of `today`.
///
/// No estimate is produced when nothing has completed yet (rate 0) or
/// nothing remains.
pub fn forecast_site(counts: SiteTaskCounts, today: DateOnly) -> SiteForecast {
    let completion_rate = if counts.total > 0 {
        counts.completed as f64 / counts.total as f64
    } else {
        0.0
    };
    let remaining = counts.pending + counts.in_progress;

    let estimated_days = if completion_rate > 0.0 && remaining > 0 {
        Some(remaining as f64 / (completion_rate * 7.0))
    } else {
        None
    };
    // A projection past chrono's date range is not a usable estimate;
    // report no estimate at all rather than a days figure with no date.
    let (estimated_days, estimated_completion_date) = match estimated_days {
        Some(days) => match today.checked_add_signed(Duration::days(days.round() as i64)) {
            Some(date) => (Some(days), Some(date)),
            None => (None, None),
        },
        None => (None, None),
    };

    SiteForecast {
        site: counts.site,
        total_tasks: counts.total,
        completed_tasks: counts.completed,
        in_progress_tasks: counts.in_progress,
        pending_tasks: counts.pending,
        remaining_tasks: remaining,
        completion_rate,
        estimated_days,
        estimated_completion_date,
        risk_level: RiskLevel::from_completion_rate(completion_rate),
    }
}

/// Forecast every site in the input, preserving input order.
pub fn forecast_sites(counts: Vec<SiteTaskCounts>, today: DateOnly) -> Vec<SiteForecast> {
    counts
        .into_iter()
        .map(|c| forecast_site(c, today))
        .collect()
}
