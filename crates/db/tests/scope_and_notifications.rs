//! Integration tests for scope upload batches, the assignment audit trail,
//! and the notification log.

use sqlx::PgPool;

use scopetrack_db::models::notification::NotificationType;
use scopetrack_db::models::scope_upload::UploadStatus;
use scopetrack_db::repositories::{AssignmentRepo, NotificationRepo, ScopeUploadRepo, TaskRepo};

use scopetrack_core::ingest::ScopeTaskRow;
use scopetrack_core::status::TaskStatus;

fn scope_row(site: &str) -> ScopeTaskRow {
    ScopeTaskRow {
        site: site.to_string(),
        site_project: String::new(),
        hierarchy_item_name: String::new(),
        description: String::new(),
        mechanism: String::new(),
        method: String::new(),
        extent: String::new(),
        frequency: None,
        interval_type: String::new(),
        inspection_priority: None,
        last_inspection_date: None,
        install_date: None,
        due_date: None,
        current_inspection_date: None,
        inspector: "Unassigned".to_string(),
        status: TaskStatus::UnInitiated,
        comments: String::new(),
    }
}

// ---------------------------------------------------------------------------
// Scope uploads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upload_starts_in_pending_review(pool: PgPool) {
    let upload = ScopeUploadRepo::create(&pool, "scope_2026.xlsx", "Kent Manuel", 42)
        .await
        .unwrap();

    assert_eq!(upload.status, UploadStatus::PendingReview);
    assert_eq!(upload.records_count, 42);
    assert_eq!(upload.review_notes, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_records_outcome_and_notes(pool: PgPool) {
    let upload = ScopeUploadRepo::create(&pool, "scope_2026.xlsx", "Kent Manuel", 10)
        .await
        .unwrap();

    let reviewed = ScopeUploadRepo::review(
        &pool,
        upload.id,
        UploadStatus::Approved,
        Some("Checked against the workbook"),
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(reviewed.status, UploadStatus::Approved);
    assert_eq!(
        reviewed.review_notes.as_deref(),
        Some("Checked against the workbook")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_missing_upload_returns_none(pool: PgPool) {
    let reviewed = ScopeUploadRepo::review(&pool, 999_999, UploadStatus::Rejected, None)
        .await
        .unwrap();
    assert!(reviewed.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_uploads_list_newest_first(pool: PgPool) {
    ScopeUploadRepo::create(&pool, "first.xlsx", "Kent Manuel", 1)
        .await
        .unwrap();
    let second = ScopeUploadRepo::create(&pool, "second.xlsx", "Kent Manuel", 2)
        .await
        .unwrap();

    let uploads = ScopeUploadRepo::list(&pool, 10).await.unwrap();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].id, second.id);
}

// ---------------------------------------------------------------------------
// Assignment audit trail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignment_history_is_append_only(pool: PgPool) {
    let task = TaskRepo::create(&pool, &scope_row("1201")).await.unwrap();

    AssignmentRepo::create(&pool, task.id, "System", "Kent Manuel", None)
        .await
        .unwrap();
    AssignmentRepo::create(&pool, task.id, "Kent Manuel", "Brad Sisk", Some("handover"))
        .await
        .unwrap();

    let history = AssignmentRepo::list_for_task(&pool, task.id).await.unwrap();
    assert_eq!(history.len(), 2);
    // Newest first.
    assert_eq!(history[0].assigned_to, "Brad Sisk");
    assert_eq!(history[0].notes.as_deref(), Some("handover"));
    assert_eq!(history[1].assigned_to, "Kent Manuel");
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_notifications_created_unread(pool: PgPool) {
    let task = TaskRepo::create(&pool, &scope_row("1201")).await.unwrap();

    NotificationRepo::create(
        &pool,
        Some(task.id),
        NotificationType::TaskClaimed,
        "Task claimed by Kent Manuel",
    )
    .await
    .unwrap();

    assert_eq!(NotificationRepo::unread_count(&pool).await.unwrap(), 1);

    let unread = NotificationRepo::list(&pool, true, 50, 0).await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].notification_type, "task_claimed");
    assert_eq!(unread[0].task_id, Some(task.id));
    assert!(!unread[0].read_status);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_is_idempotent(pool: PgPool) {
    let id = NotificationRepo::create(&pool, None, NotificationType::StatusChange, "note")
        .await
        .unwrap();

    assert!(NotificationRepo::mark_read(&pool, id).await.unwrap());
    assert_eq!(NotificationRepo::unread_count(&pool).await.unwrap(), 0);

    // Second call still reports the row as found.
    assert!(NotificationRepo::mark_read(&pool, id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_read_missing_notification(pool: PgPool) {
    assert!(!NotificationRepo::mark_read(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unread_filter_excludes_read_rows(pool: PgPool) {
    let first = NotificationRepo::create(&pool, None, NotificationType::TaskAssignment, "a")
        .await
        .unwrap();
    NotificationRepo::create(&pool, None, NotificationType::TaskAssignment, "b")
        .await
        .unwrap();

    NotificationRepo::mark_read(&pool, first).await.unwrap();

    let unread = NotificationRepo::list(&pool, true, 50, 0).await.unwrap();
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].message, "b");

    let all = NotificationRepo::list(&pool, false, 50, 0).await.unwrap();
    assert_eq!(all.len(), 2);
}
