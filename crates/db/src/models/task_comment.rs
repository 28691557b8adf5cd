//! Task comment entity model and DTOs. Comments are append-only.

use sqlx::FromRow;
use taskhub_core::types::{DbId, Timestamp};

/// A comment row from the `task_comments` table.
#[derive(Debug, Clone, FromRow)]
pub struct TaskComment {
    pub id: DbId,
    pub task_id: DbId,
    pub content: String,
    pub author_email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new comment. Every field is required.
#[derive(Debug, Clone)]
pub struct CreateTaskComment {
    pub task_id: DbId,
    pub content: String,
    pub author_email: String,
}
