//! Repository for the `task_comments` table.

use sqlx::PgPool;
use taskhub_core::types::DbId;

use crate::models::task_comment::{CreateTaskComment, TaskComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, content, author_email, created_at, updated_at";

/// Provides create and read operations for task comments.
pub struct TaskCommentRepo;

impl TaskCommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTaskComment,
    ) -> Result<TaskComment, sqlx::Error> {
        let query = format!(
            "INSERT INTO task_comments (task_id, content, author_email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(input.task_id)
            .bind(&input.content)
            .bind(&input.author_email)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TaskComment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task_comments WHERE id = $1");
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List comments on a task, oldest first. Ties on `created_at` fall
    /// back to insertion order.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<TaskComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM task_comments
             WHERE task_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Find the earliest comment on a task by a given author.
    pub async fn find_by_task_and_author(
        pool: &PgPool,
        task_id: DbId,
        author_email: &str,
    ) -> Result<Option<TaskComment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM task_comments
             WHERE task_id = $1 AND author_email = $2
             ORDER BY created_at ASC, id ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, TaskComment>(&query)
            .bind(task_id)
            .bind(author_email)
            .fetch_optional(pool)
            .await
    }

    /// Total number of comments.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM task_comments")
            .fetch_one(pool)
            .await
    }
}
