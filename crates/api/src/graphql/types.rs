//! GraphQL object types wrapping the database rows.
//!
//! Scalar columns are exposed as-is (camelCased). Relationship fields and
//! the two project aggregates are resolved lazily against the pool.

use async_graphql::{Context, Enum, Object, Result, ResultExt, SimpleObject, ID};
use taskhub_core::types::{Date, Timestamp};
use taskhub_db::models::organization::Organization;
use taskhub_db::models::project::Project;
use taskhub_db::models::status::{ProjectStatus, TaskStatus};
use taskhub_db::models::task::Task;
use taskhub_db::models::task_comment::TaskComment;
use taskhub_db::repositories::{OrganizationRepo, ProjectRepo, TaskCommentRepo, TaskRepo};

use super::pool;
use crate::error::{AppError, AppResult};

fn to_id(id: i64) -> ID {
    ID(id.to_string())
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "ProjectStatus", remote = "ProjectStatus")]
pub enum ProjectStatusType {
    Active,
    Completed,
    OnHold,
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "TaskStatus", remote = "TaskStatus")]
pub enum TaskStatusType {
    Todo,
    InProgress,
    Done,
}

// ---------------------------------------------------------------------------
// Organization
// ---------------------------------------------------------------------------

/// A tenant. Owns projects.
pub struct OrganizationType(pub Organization);

#[Object(name = "Organization")]
impl OrganizationType {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn slug(&self) -> &str {
        &self.0.slug
    }

    async fn contact_email(&self) -> &str {
        &self.0.contact_email
    }

    async fn created_at(&self) -> Timestamp {
        self.0.created_at
    }

    async fn updated_at(&self) -> Timestamp {
        self.0.updated_at
    }

    /// Projects owned by this organization, newest first.
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<ProjectType>> {
        let projects = ProjectRepo::list_by_organization(pool(ctx)?, self.0.id)
            .await
            .map_err(AppError::from)
            .extend()?;
        Ok(projects.into_iter().map(ProjectType).collect())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A project within an organization.
pub struct ProjectType(pub Project);

#[Object(name = "Project")]
impl ProjectType {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn status(&self) -> ProjectStatusType {
        self.0.status.into()
    }

    async fn due_date(&self) -> Option<Date> {
        self.0.due_date
    }

    async fn created_at(&self) -> Timestamp {
        self.0.created_at
    }

    async fn updated_at(&self) -> Timestamp {
        self.0.updated_at
    }

    async fn organization(&self, ctx: &Context<'_>) -> Result<OrganizationType> {
        load_organization(pool(ctx)?, self.0.organization_id)
            .await
            .extend()
    }

    /// Tasks in this project, newest first.
    async fn tasks(&self, ctx: &Context<'_>) -> Result<Vec<TaskType>> {
        let tasks = TaskRepo::list_by_project(pool(ctx)?, self.0.id)
            .await
            .map_err(AppError::from)
            .extend()?;
        Ok(tasks.into_iter().map(TaskType).collect())
    }

    /// Number of tasks in the project. Counted on every request.
    async fn task_count(&self, ctx: &Context<'_>) -> Result<i64> {
        TaskRepo::count_by_project(pool(ctx)?, self.0.id)
            .await
            .map_err(AppError::from)
            .extend()
    }

    /// Number of tasks in the project with status `DONE`.
    async fn completed_tasks(&self, ctx: &Context<'_>) -> Result<i64> {
        TaskRepo::count_by_project_and_status(pool(ctx)?, self.0.id, TaskStatus::Done)
            .await
            .map_err(AppError::from)
            .extend()
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

pub struct TaskType(pub Task);

#[Object(name = "Task")]
impl TaskType {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn status(&self) -> TaskStatusType {
        self.0.status.into()
    }

    async fn assignee_email(&self) -> Option<&str> {
        self.0.assignee_email.as_deref()
    }

    async fn due_date(&self) -> Option<Timestamp> {
        self.0.due_date
    }

    async fn created_at(&self) -> Timestamp {
        self.0.created_at
    }

    async fn updated_at(&self) -> Timestamp {
        self.0.updated_at
    }

    async fn project(&self, ctx: &Context<'_>) -> Result<ProjectType> {
        load_project(pool(ctx)?, self.0.project_id).await.extend()
    }

    /// Comments on this task, oldest first.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<TaskCommentType>> {
        let comments = TaskCommentRepo::list_by_task(pool(ctx)?, self.0.id)
            .await
            .map_err(AppError::from)
            .extend()?;
        Ok(comments.into_iter().map(TaskCommentType).collect())
    }
}

// ---------------------------------------------------------------------------
// TaskComment
// ---------------------------------------------------------------------------

pub struct TaskCommentType(pub TaskComment);

#[Object(name = "TaskComment")]
impl TaskCommentType {
    async fn id(&self) -> ID {
        to_id(self.0.id)
    }

    async fn content(&self) -> &str {
        &self.0.content
    }

    async fn author_email(&self) -> &str {
        &self.0.author_email
    }

    async fn created_at(&self) -> Timestamp {
        self.0.created_at
    }

    async fn updated_at(&self) -> Timestamp {
        self.0.updated_at
    }

    async fn task(&self, ctx: &Context<'_>) -> Result<TaskType> {
        load_task(pool(ctx)?, self.0.task_id).await.extend()
    }
}

// ---------------------------------------------------------------------------
// Mutation payloads
// ---------------------------------------------------------------------------

#[derive(SimpleObject)]
pub struct CreateProjectPayload {
    pub project: ProjectType,
}

#[derive(SimpleObject)]
pub struct UpdateProjectPayload {
    pub project: ProjectType,
}

#[derive(SimpleObject)]
pub struct CreateTaskPayload {
    pub task: TaskType,
}

#[derive(SimpleObject)]
pub struct UpdateTaskPayload {
    pub task: TaskType,
}

#[derive(SimpleObject)]
pub struct CreateCommentPayload {
    pub comment: TaskCommentType,
}

// ---------------------------------------------------------------------------
// Loaders shared with the query and mutation roots
// ---------------------------------------------------------------------------

pub(crate) async fn load_organization(
    pool: &taskhub_db::DbPool,
    id: i64,
) -> AppResult<OrganizationType> {
    OrganizationRepo::find_by_id(pool, id)
        .await?
        .map(OrganizationType)
        .ok_or_else(|| AppError::not_found("Organization", id))
}

pub(crate) async fn load_project(pool: &taskhub_db::DbPool, id: i64) -> AppResult<ProjectType> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .map(ProjectType)
        .ok_or_else(|| AppError::not_found("Project", id))
}

pub(crate) async fn load_task(pool: &taskhub_db::DbPool, id: i64) -> AppResult<TaskType> {
    TaskRepo::find_by_id(pool, id)
        .await?
        .map(TaskType)
        .ok_or_else(|| AppError::not_found("Task", id))
}
