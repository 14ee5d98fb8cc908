//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the operations that mutate that entity

pub mod assignment;
pub mod dashboard;
pub mod lookup;
pub mod notification;
pub mod report;
pub mod scope_upload;
pub mod task;
