//! Task entity model and DTOs.

use sqlx::FromRow;
use taskhub_core::types::{DbId, Timestamp};

use crate::models::status::TaskStatus;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee_email: Option<String>,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `TODO` if omitted.
    pub status: Option<TaskStatus>,
    pub assignee_email: Option<String>,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating an existing task. All fields are optional and `None`
/// leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub assignee_email: Option<String>,
    pub due_date: Option<Timestamp>,
}

impl UpdateTask {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.assignee_email.is_none()
            && self.due_date.is_none()
    }
}
