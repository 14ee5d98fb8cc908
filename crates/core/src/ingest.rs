//! Scope-row normalization for batch ingestion.
//!
//! The upload endpoint receives already-parsed spreadsheet rows as JSON;
//! parsing the spreadsheet itself happens upstream. Normalization applies
//! the tracker's loader defaults (missing inspector -> "Unassigned", missing
//! status -> UnInitiated, missing text -> empty string) and rejects rows whose
//! status is not a known lifecycle value. Bad rows are skipped and counted,
//! never fatal to the batch.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::status::TaskStatus;
use crate::types::DateOnly;

/// One raw row from an uploaded scope sheet. Every column is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawScopeRow {
    pub site: Option<String>,
    pub site_project: Option<String>,
    pub hierarchy_item_name: Option<String>,
    pub description: Option<String>,
    pub mechanism: Option<String>,
    pub method: Option<String>,
    pub extent: Option<String>,
    pub frequency: Option<f64>,
    pub interval_type: Option<String>,
    pub inspection_priority: Option<i32>,
    pub last_inspection_date: Option<DateOnly>,
    pub install_date: Option<DateOnly>,
    pub due_date: Option<DateOnly>,
    pub current_inspection_date: Option<DateOnly>,
    pub inspector: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
}

/// A normalized row ready for bulk insert into the task store.
#[derive(Debug, Clone)]
pub struct ScopeTaskRow {
    pub site: String,
    pub site_project: String,
    pub hierarchy_item_name: String,
    pub description: String,
    pub mechanism: String,
    pub method: String,
    pub extent: String,
    pub frequency: Option<f64>,
    pub interval_type: String,
    pub inspection_priority: Option<i32>,
    pub last_inspection_date: Option<DateOnly>,
    pub install_date: Option<DateOnly>,
    pub due_date: Option<DateOnly>,
    pub current_inspection_date: Option<DateOnly>,
    pub inspector: String,
    pub status: TaskStatus,
    pub comments: String,
}

/// A row that failed normalization, reported back to the uploader.
#[derive(Debug, serde::Serialize)]
pub struct RowFailure {
    /// 0-based index of the row within the uploaded batch.
    pub row: usize,
    pub reason: String,
}

/// Outcome of normalizing a batch.
#[derive(Debug)]
pub struct ScopeBatch {
    pub tasks: Vec<ScopeTaskRow>,
    pub failures: Vec<RowFailure>,
}

/// Normalize a single raw row.
pub fn normalize_row(raw: RawScopeRow) -> CoreResult<ScopeTaskRow> {
    let status = match raw.status.as_deref() {
        None | Some("") => TaskStatus::UnInitiated,
        Some(value) => value.parse()?,
    };
    let inspector = match raw.inspector {
        Some(name) if !name.trim().is_empty() => name,
        _ => "Unassigned".to_string(),
    };
    if raw.frequency.is_some_and(|f| f < 0.0) {
        return Err(CoreError::validation("frequency must be >= 0"));
    }

    Ok(ScopeTaskRow {
        site: raw.site.unwrap_or_default(),
        site_project: raw.site_project.unwrap_or_default(),
        hierarchy_item_name: raw.hierarchy_item_name.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        mechanism: raw.mechanism.unwrap_or_default(),
        method: raw.method.unwrap_or_default(),
        extent: raw.extent.unwrap_or_default(),
        frequency: raw.frequency,
        interval_type: raw.interval_type.unwrap_or_default(),
        inspection_priority: raw.inspection_priority,
        last_inspection_date: raw.last_inspection_date,
        install_date: raw.install_date,
        due_date: raw.due_date,
        current_inspection_date: raw.current_inspection_date,
        inspector,
        status,
        comments: raw.comments.unwrap_or_default(),
    })
}

/// Normalize a batch, collecting failures instead of aborting.
pub fn normalize_batch(rows: Vec<RawScopeRow>) -> ScopeBatch {
    let mut tasks = Vec::with_capacity(rows.len());
    let mut failures = Vec::new();

    for (row, raw) in rows.into_iter().enumerate() {
        match normalize_row(raw) {
            Ok(task) => tasks.push(task),
            Err(err) => {
                tracing::warn!(row, error = %err, "Skipping unparseable scope row");
                failures.push(RowFailure {
                    row,
                    reason: err.to_string(),
                });
            }
        }
    }

    ScopeBatch { tasks, failures }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_gets_loader_defaults() {
        let task = normalize_row(RawScopeRow::default()).unwrap();
        assert_eq!(task.inspector, "Unassigned");
        assert_eq!(task.status, TaskStatus::UnInitiated);
        assert_eq!(task.site, "");
        assert_eq!(task.frequency, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn blank_inspector_becomes_unassigned() {
        let raw = RawScopeRow {
            inspector: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize_row(raw).unwrap().inspector, "Unassigned");
    }

    #[test]
    fn explicit_status_is_parsed() {
        let raw = RawScopeRow {
            status: Some("Claimed".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize_row(raw).unwrap().status, TaskStatus::Claimed);
    }

    #[test]
    fn unknown_status_fails_the_row() {
        let raw = RawScopeRow {
            status: Some("Done".to_string()),
            ..Default::default()
        };
        assert!(normalize_row(raw).is_err());
    }

    #[test]
    fn negative_frequency_fails_the_row() {
        let raw = RawScopeRow {
            frequency: Some(-1.0),
            ..Default::default()
        };
        assert!(normalize_row(raw).is_err());
    }

    #[test]
    fn bad_rows_are_skipped_not_fatal() {
        let rows = vec![
            RawScopeRow {
                site: Some("1201".to_string()),
                ..Default::default()
            },
            RawScopeRow {
                status: Some("NotAStatus".to_string()),
                ..Default::default()
            },
            RawScopeRow {
                site: Some("1401".to_string()),
                ..Default::default()
            },
        ];
        let batch = normalize_batch(rows);
        assert_eq!(batch.tasks.len(), 2);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].row, 1);
    }
}
