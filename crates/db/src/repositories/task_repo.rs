//! Repository for the `inspection_tasks` table.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use scopetrack_core::ingest::ScopeTaskRow;
use scopetrack_core::paging::Page;
use scopetrack_core::status::TaskStatus;
use scopetrack_core::types::DbId;

use crate::models::task::{InspectionTask, TaskFilter, TaskPatch};

/// Column list for `inspection_tasks` queries.
const COLUMNS: &str = "id, site, site_project, hierarchy_item_name, description, mechanism, \
    method, extent, frequency, interval_type, inspection_priority, last_inspection_date, \
    install_date, due_date, current_inspection_date, inspector, status, comments, \
    created_at, updated_at";

/// SQL condition matching overdue tasks, built from the core completed-status
/// set so SQL and in-process checks can never disagree.
pub fn overdue_condition() -> String {
    let completed: Vec<String> = TaskStatus::COMPLETED
        .iter()
        .map(|s| format!("'{}'", s.as_str()))
        .collect();
    format!(
        "due_date IS NOT NULL AND due_date < CURRENT_DATE AND status NOT IN ({})",
        completed.join(", ")
    )
}

/// Provides CRUD and lifecycle operations for inspection tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert one normalized scope row, returning the created task.
    pub async fn create(pool: &PgPool, row: &ScopeTaskRow) -> Result<InspectionTask, sqlx::Error> {
        bind_scope_row(sqlx::query_as::<_, InspectionTask>(INSERT_SQL), row)
            .fetch_one(pool)
            .await
    }

    /// Bulk-insert normalized scope rows in a single transaction.
    ///
    /// All rows commit or none do; returns the number inserted.
    pub async fn bulk_insert(pool: &PgPool, rows: &[ScopeTaskRow]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for row in rows {
            bind_scope_row(sqlx::query_as::<_, InspectionTask>(INSERT_SQL), row)
                .fetch_one(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(rows.len() as u64)
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InspectionTask>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM inspection_tasks WHERE id = $1");
        sqlx::query_as::<_, InspectionTask>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks matching `filter`, ordered by due date ascending with
    /// undated tasks last (`id` as tiebreak for stable pagination).
    ///
    /// Returns the requested page plus the total match count, computed
    /// without LIMIT/OFFSET.
    pub async fn list(
        pool: &PgPool,
        filter: &TaskFilter,
        page: Page,
    ) -> Result<(Vec<InspectionTask>, i64), sqlx::Error> {
        let (where_sql, bound) = filter_where(filter);

        let list_sql = format!(
            "SELECT {COLUMNS} FROM inspection_tasks{where_sql} \
             ORDER BY due_date ASC NULLS LAST, id ASC \
             LIMIT ${} OFFSET ${}",
            bound + 1,
            bound + 2
        );
        let tasks = bind_filter(sqlx::query_as::<_, InspectionTask>(&list_sql), filter)
            .bind(page.per_page)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM inspection_tasks{where_sql}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(site) = &filter.site {
            count_query = count_query.bind(site);
        }
        if let Some(inspector) = &filter.inspector {
            count_query = count_query.bind(inspector);
        }
        if let Some(status) = filter.status {
            count_query = count_query.bind(status.as_str());
        }
        if let Some(method) = &filter.method {
            count_query = count_query.bind(method);
        }
        if let Some(priority) = filter.inspection_priority {
            count_query = count_query.bind(priority);
        }
        let total = count_query.fetch_one(pool).await?;

        Ok((tasks, total))
    }

    /// Claim a task for an inspector.
    ///
    /// Status, inspector, and `updated_at` change in one UPDATE so a
    /// concurrent writer can never observe a partial claim. Returns `None`
    /// if the task does not exist.
    pub async fn claim(
        pool: &PgPool,
        id: DbId,
        inspector: &str,
    ) -> Result<Option<InspectionTask>, sqlx::Error> {
        let query = format!(
            "UPDATE inspection_tasks \
             SET status = $2, inspector = $3, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InspectionTask>(&query)
            .bind(id)
            .bind(TaskStatus::Claimed.as_str())
            .bind(inspector)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update, bumping `updated_at`.
    ///
    /// Only the fields present in the patch are written; the whole patch is
    /// one UPDATE statement. Returns `None` if the task does not exist.
    /// Callers must reject empty patches before getting here.
    pub async fn apply_patch(
        pool: &PgPool,
        id: DbId,
        patch: &TaskPatch,
    ) -> Result<Option<InspectionTask>, sqlx::Error> {
        let mut sets = vec!["updated_at = NOW()".to_string()];
        let mut next = 2; // $1 is the task id
        let mut push = |column: &str, sets: &mut Vec<String>| {
            sets.push(format!("{column} = ${next}"));
            next += 1;
        };
        if patch.status.is_some() {
            push("status", &mut sets);
        }
        if patch.method.is_some() {
            push("method", &mut sets);
        }
        if patch.inspection_priority.is_some() {
            push("inspection_priority", &mut sets);
        }
        if patch.current_inspection_date.is_some() {
            push("current_inspection_date", &mut sets);
        }
        if patch.mechanism.is_some() {
            push("mechanism", &mut sets);
        }
        if patch.comments.is_some() {
            push("comments", &mut sets);
        }
        if patch.inspector.is_some() {
            push("inspector", &mut sets);
        }

        let query = format!(
            "UPDATE inspection_tasks SET {} WHERE id = $1 RETURNING {COLUMNS}",
            sets.join(", ")
        );
        let mut update = sqlx::query_as::<_, InspectionTask>(&query).bind(id);
        if let Some(status) = patch.status {
            update = update.bind(status.as_str());
        }
        if let Some(method) = &patch.method {
            update = update.bind(method);
        }
        if let Some(priority) = patch.inspection_priority {
            update = update.bind(priority);
        }
        if let Some(date) = patch.current_inspection_date {
            update = update.bind(date);
        }
        if let Some(mechanism) = &patch.mechanism {
            update = update.bind(mechanism);
        }
        if let Some(comments) = &patch.comments {
            update = update.bind(comments);
        }
        if let Some(inspector) = &patch.inspector {
            update = update.bind(inspector);
        }
        update.fetch_optional(pool).await
    }

    /// Tasks touched within the last `window_hours`, newest first.
    pub async fn recent_activity(
        pool: &PgPool,
        window_hours: i64,
        limit: i64,
    ) -> Result<Vec<InspectionTask>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM inspection_tasks \
             WHERE updated_at >= NOW() - make_interval(hours => $1::int) \
             ORDER BY updated_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, InspectionTask>(&query)
            .bind(window_hours)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

/// Insert statement shared by `create` and `bulk_insert`. The RETURNING list
/// mirrors [`COLUMNS`].
const INSERT_SQL: &str = "INSERT INTO inspection_tasks \
    (site, site_project, hierarchy_item_name, description, mechanism, method, extent, \
     frequency, interval_type, inspection_priority, last_inspection_date, install_date, \
     due_date, current_inspection_date, inspector, status, comments) \
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
    RETURNING id, site, site_project, hierarchy_item_name, description, mechanism, \
    method, extent, frequency, interval_type, inspection_priority, last_inspection_date, \
    install_date, due_date, current_inspection_date, inspector, status, comments, \
    created_at, updated_at";

/// Bind a normalized scope row to the insert statement, in column order.
fn bind_scope_row<'q>(
    query: QueryAs<'q, Postgres, InspectionTask, PgArguments>,
    row: &'q ScopeTaskRow,
) -> QueryAs<'q, Postgres, InspectionTask, PgArguments> {
    query
        .bind(&row.site)
        .bind(&row.site_project)
        .bind(&row.hierarchy_item_name)
        .bind(&row.description)
        .bind(&row.mechanism)
        .bind(&row.method)
        .bind(&row.extent)
        .bind(row.frequency)
        .bind(&row.interval_type)
        .bind(row.inspection_priority)
        .bind(row.last_inspection_date)
        .bind(row.install_date)
        .bind(row.due_date)
        .bind(row.current_inspection_date)
        .bind(&row.inspector)
        .bind(row.status.as_str())
        .bind(&row.comments)
}

/// Build the WHERE clause for a filter, returning it and the number of
/// parameters it binds.
fn filter_where(filter: &TaskFilter) -> (String, usize) {
    let mut conditions = Vec::new();
    let mut next = 1;
    let mut add = |column: &str, conditions: &mut Vec<String>| {
        conditions.push(format!("{column} = ${next}"));
        next += 1;
    };
    if filter.site.is_some() {
        add("site", &mut conditions);
    }
    if filter.inspector.is_some() {
        add("inspector", &mut conditions);
    }
    if filter.status.is_some() {
        add("status", &mut conditions);
    }
    if filter.method.is_some() {
        add("method", &mut conditions);
    }
    if filter.inspection_priority.is_some() {
        add("inspection_priority", &mut conditions);
    }

    let bound = next - 1;
    if conditions.is_empty() {
        (String::new(), 0)
    } else {
        (format!(" WHERE {}", conditions.join(" AND ")), bound)
    }
}

/// Bind filter values in the same order `filter_where` numbered them.
fn bind_filter<'q>(
    query: QueryAs<'q, Postgres, InspectionTask, PgArguments>,
    filter: &'q TaskFilter,
) -> QueryAs<'q, Postgres, InspectionTask, PgArguments> {
    let mut query = query;
    if let Some(site) = &filter.site {
        query = query.bind(site);
    }
    if let Some(inspector) = &filter.inspector {
        query = query.bind(inspector);
    }
    if let Some(status) = filter.status {
        query = query.bind(status.as_str());
    }
    if let Some(method) = &filter.method {
        query = query.bind(method);
    }
    if let Some(priority) = filter.inspection_priority {
        query = query.bind(priority);
    }
    query
}
