//! Reference data for the tracker's selection inputs.
//!
//! Lookup rows are seeded by migration and read-only from the core's
//! perspective. Task fields reference them by name/code as free-text
//! snapshots, deliberately not foreign keys.

use serde::Serialize;
use sqlx::FromRow;

use scopetrack_core::types::DbId;

/// A row from the `inspectors` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Inspector {
    pub id: DbId,
    pub name: String,
    pub active: bool,
}

/// A row from the `sites` lookup table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Site {
    pub id: DbId,
    pub site_code: String,
    pub site_name: String,
    pub active: bool,
}

/// A row from the `methods` lookup table (inspection techniques).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Method {
    pub id: DbId,
    pub method_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub active: bool,
}

/// A row from the `status_types` lookup table (display metadata for the
/// lifecycle statuses).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusType {
    pub id: DbId,
    pub status_name: String,
    pub description: Option<String>,
    pub color_code: Option<String>,
    pub active: bool,
}
