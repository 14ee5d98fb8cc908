//! Bootstrap tests: migrations apply cleanly and seed data is present.

use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    scopetrack_db::health_check(&pool).await.unwrap();

    // Verify all four lookup tables exist and have seed data
    let tables = ["inspectors", "sites", "methods", "status_types"];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 > 0, "{table} should have seed data, got 0 rows");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_status_types_match_lifecycle(pool: PgPool) {
    let names: Vec<(String,)> =
        sqlx::query_as("SELECT status_name FROM status_types ORDER BY id ASC")
            .fetch_all(&pool)
            .await
            .unwrap();
    let names: Vec<&str> = names.iter().map(|(n,)| n.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "UnInitiated",
            "Claimed",
            "FieldComplete",
            "Reported",
            "OutOfService",
            "RT-ProfileCrew",
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_table_defaults(pool: PgPool) {
    // A bare insert picks up the loader defaults from the schema.
    let (inspector, status): (String, String) = sqlx::query_as(
        "INSERT INTO inspection_tasks (site) VALUES ('1201') RETURNING inspector, status",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(inspector, "Unassigned");
    assert_eq!(status, "UnInitiated");
}
