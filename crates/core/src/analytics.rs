//! Aggregation math for dashboard and performance views.
//!
//! The database layer produces raw per-group counts; everything derived
//! (percentages, orderings) is computed here so the rounding and
//! division-by-zero rules live in one place.

use std::cmp::Ordering;

use serde::Serialize;

/// Completion rate as a percentage with two decimal places.
///
/// Returns 0.0 when `total` is 0; never NaN.
pub fn completion_rate_pct(completed: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let rate = completed as f64 / total as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// Descending order by completion rate, with ties left in input order.
fn by_rate_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

// ---------------------------------------------------------------------------
// Per-site progress
// ---------------------------------------------------------------------------

/// Raw task counts for one site.
#[derive(Debug, Clone)]
pub struct SiteCounts {
    pub site: String,
    pub total: i64,
    pub completed: i64,
}

/// Per-site progress with derived completion rate.
#[derive(Debug, Clone, Serialize)]
pub struct SiteProgress {
    pub site: String,
    pub total: i64,
    pub completed: i64,
    pub completion_rate: f64,
}

/// Derive per-site progress, ordered by completion rate descending.
///
/// Sites with an empty name are dropped (blank spreadsheet rows).
pub fn site_progress(counts: Vec<SiteCounts>) -> Vec<SiteProgress> {
    let mut rows: Vec<SiteProgress> = counts
        .into_iter()
        .filter(|c| !c.site.is_empty())
        .map(|c| SiteProgress {
            completion_rate: completion_rate_pct(c.completed, c.total),
            site: c.site,
            total: c.total,
            completed: c.completed,
        })
        .collect();
    rows.sort_by(|a, b| by_rate_desc(a.completion_rate, b.completion_rate));
    rows
}

// ---------------------------------------------------------------------------
// Inspector performance
// ---------------------------------------------------------------------------

/// Raw task counts for one inspector.
#[derive(Debug, Clone)]
pub struct InspectorCounts {
    pub inspector: String,
    pub total_assigned: i64,
    pub completed: i64,
    pub in_progress: i64,
}

/// Per-inspector performance with derived completion rate.
#[derive(Debug, Clone, Serialize)]
pub struct InspectorPerformance {
    pub inspector: String,
    pub total_assigned: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub completion_rate: f64,
}

/// Derive inspector performance, ordered by completion rate descending.
///
/// The empty string and the "Unassigned" placeholder are excluded; they are
/// buckets, not people.
pub fn inspector_performance(counts: Vec<InspectorCounts>) -> Vec<InspectorPerformance> {
    let mut rows: Vec<InspectorPerformance> = counts
        .into_iter()
        .filter(|c| !c.inspector.is_empty() && c.inspector != "Unassigned")
        .map(|c| InspectorPerformance {
            completion_rate: completion_rate_pct(c.completed, c.total_assigned),
            inspector: c.inspector,
            total_assigned: c.total_assigned,
            completed: c.completed,
            in_progress: c.in_progress,
        })
        .collect();
    rows.sort_by(|a, b| by_rate_desc(a.completion_rate, b.completion_rate));
    rows
}
