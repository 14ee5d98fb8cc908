//! HTTP-level integration tests for the task listing and lifecycle
//! endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. Tasks are seeded through the scope
//! upload endpoint, the same path production data takes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

/// Seed `count` tasks for a site through the upload endpoint.
async fn seed_tasks(pool: &PgPool, site: &str, count: usize) {
    let rows: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "site": site,
                "hierarchy_item_name": format!("V-{i:03}"),
                "method": "VI-EXT",
                "due_date": "2026-09-01",
            })
        })
        .collect();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/scope/upload",
        serde_json::json!({
            "filename": "seed.xlsx",
            "uploaded_by": "System",
            "rows": rows,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// ID of the first task in the default listing.
async fn first_task_id(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/tasks").await;
    let json = body_json(response).await;
    json["data"][0]["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Listing and pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_empty_store(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/tasks").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["total"], 0);
    assert_eq!(json["pages"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_pagination_contract(pool: PgPool) {
    seed_tasks(&pool, "1201", 25).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/tasks?page=3&per_page=10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
    assert_eq!(json["total"], 25);
    assert_eq!(json["page"], 3);
    assert_eq!(json["per_page"], 10);
    assert_eq!(json["pages"], 3);

    // A page past the end is empty but keeps the totals.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/tasks?page=4&per_page=10").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["total"], 25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_invalid_page_is_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/tasks?page=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/tasks?per_page=-5").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A page number whose offset cannot be represented is a 400, not a 500.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/tasks?page=9223372036854775807").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_filters_by_site(pool: PgPool) {
    seed_tasks(&pool, "1201", 3).await;
    seed_tasks(&pool, "1401", 2).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/tasks?site=1401").await).await;

    assert_eq!(json["total"], 2);
    for task in json["data"].as_array().unwrap() {
        assert_eq!(task["site"], "1401");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_tasks_filters_by_status(pool: PgPool) {
    seed_tasks(&pool, "1201", 2).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        &format!("/api/tasks/{id}/claim"),
        serde_json::json!({"inspector": "Kent Manuel"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/tasks?status=Claimed").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["id"], id);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_task_by_id(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/tasks/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
    assert_eq!(json["data"]["status"], "UnInitiated");
    assert_eq!(json["data"]["inspector"], "Unassigned");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_task_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/tasks/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Claim
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_claim_task(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/tasks/{id}/claim"),
        serde_json::json!({"inspector": "Kent Manuel"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "Claimed");
    assert_eq!(json["data"]["inspector"], "Kent Manuel");

    // The claim leaves a notification in the side channel.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/notifications?unread_only=true").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["notification_type"], "task_claimed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_claim_with_blank_inspector_is_400(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/tasks/{id}/claim"),
        serde_json::json!({"inspector": "   "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_claim_nonexistent_task_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tasks/999999/claim",
        serde_json::json!({"inspector": "Kent Manuel"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_task_fields(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/tasks/{id}/update"),
        serde_json::json!({
            "status": "FieldComplete",
            "comments": "Scaffolding removed",
            "current_inspection_date": "2026-08-20",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "FieldComplete");
    assert_eq!(json["data"]["comments"], "Scaffolding removed");
    assert_eq!(json["data"]["current_inspection_date"], "2026-08-20");
    // Absent fields are untouched.
    assert_eq!(json["data"]["method"], "VI-EXT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_empty_patch_is_400(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/tasks/{id}/update"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_unknown_status_is_rejected(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    // An unknown status fails Json deserialization, which axum reports
    // as 422.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/tasks/{id}/update"),
        serde_json::json!({"status": "Done"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Assign
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_task_records_audit_row(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/tasks/assign",
        serde_json::json!({
            "task_id": id,
            "assigned_to": "Brad Sisk",
            "assigned_by": "Kent Manuel",
            "notes": "Covering next outage",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["task"]["status"], "Claimed");
    assert_eq!(json["data"]["task"]["inspector"], "Brad Sisk");
    assert_eq!(json["data"]["assignment"]["assigned_by"], "Kent Manuel");

    // The audit trail is readable back through the history endpoint.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/tasks/{id}/assignments")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["assigned_to"], "Brad Sisk");
    assert_eq!(json["data"][0]["notes"], "Covering next outage");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assign_defaults_assigned_by_to_system(pool: PgPool) {
    seed_tasks(&pool, "1201", 1).await;
    let id = first_task_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tasks/assign",
        serde_json::json!({"task_id": id, "assigned_to": "Brad Sisk"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["assignment"]["assigned_by"], "System");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_assignments_for_unknown_task_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/tasks/999999/assignments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
