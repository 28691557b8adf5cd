//! Project entity model and DTOs.

use sqlx::FromRow;
use taskhub_core::types::{Date, DbId, Timestamp};

use crate::models::status::ProjectStatus;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub organization_id: DbId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub organization_id: DbId,
    pub name: String,
    /// Defaults to the empty string if omitted.
    pub description: Option<String>,
    /// Defaults to `ACTIVE` if omitted.
    pub status: Option<ProjectStatus>,
    pub due_date: Option<Date>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// `None` means "leave the stored value alone"; there is no way to clear
/// `due_date` back to null through an update.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub due_date: Option<Date>,
}

impl UpdateProject {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
    }
}
