//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskhub_core::types::DbId;

use crate::models::status::TaskStatus;
use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status, assignee_email, \
                       due_date, created_at, updated_at";

/// Provides CRUD operations and per-project aggregates for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// Omitted `description` becomes `''` and omitted `status` becomes `TODO`.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, title, description, status, assignee_email, due_date)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'TODO'), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(&input.assignee_email)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks for a project, newest first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Find a task by project and exact title.
    pub async fn find_by_project_and_title(
        pool: &PgPool,
        project_id: DbId,
        title: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_id = $1 AND title = $2
             ORDER BY id
             LIMIT 1"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Number of tasks under a project.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Number of tasks under a project that are in `status`.
    pub async fn count_by_project_and_status(
        pool: &PgPool,
        project_id: DbId,
        status: TaskStatus,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE project_id = $1 AND status = $2")
            .bind(project_id)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Total number of tasks.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// An empty update writes nothing and returns the row as stored.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                assignee_email = COALESCE($5, assignee_email),
                due_date = COALESCE($6, due_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(&input.assignee_email)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }
}
