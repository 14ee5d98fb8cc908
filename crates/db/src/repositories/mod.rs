//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod dashboard_repo;
pub mod lookup_repo;
pub mod notification_repo;
pub mod report_repo;
pub mod scope_upload_repo;
pub mod task_repo;

pub use assignment_repo::AssignmentRepo;
pub use dashboard_repo::DashboardRepo;
pub use lookup_repo::LookupRepo;
pub use notification_repo::NotificationRepo;
pub use report_repo::ReportRepo;
pub use scope_upload_repo::ScopeUploadRepo;
pub use task_repo::TaskRepo;
