//! Write root fields.
//!
//! Each mutation resolves its parent (or target) first so a dangling
//! reference surfaces as `NOT_FOUND` rather than a foreign key error, then
//! performs a single insert or update. Update arguments follow
//! "null means unchanged": omitting a field and passing `null` are the
//! same, so an update can never clear a stored value.

use async_graphql::{Context, Object, Result, ResultExt, ID};
use taskhub_core::id::parse_id;
use taskhub_core::types::{Date, Timestamp};
use taskhub_db::models::project::{CreateProject, UpdateProject};
use taskhub_db::models::task::{CreateTask, UpdateTask};
use taskhub_db::models::task_comment::CreateTaskComment;
use taskhub_db::repositories::{OrganizationRepo, ProjectRepo, TaskCommentRepo, TaskRepo};
use taskhub_db::DbPool;

use super::pool;
use super::types::{
    load_project, load_task, CreateCommentPayload, CreateProjectPayload, CreateTaskPayload,
    ProjectStatusType, ProjectType, TaskCommentType, TaskStatusType, TaskType,
    UpdateProjectPayload, UpdateTaskPayload,
};
use crate::error::{AppError, AppResult};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a project under the organization identified by `organization_slug`.
    async fn create_project(
        &self,
        ctx: &Context<'_>,
        organization_slug: String,
        name: String,
        description: Option<String>,
        status: Option<ProjectStatusType>,
        due_date: Option<Date>,
    ) -> Result<Option<CreateProjectPayload>> {
        create_project(
            pool(ctx)?,
            &organization_slug,
            name,
            description,
            status,
            due_date,
        )
        .await
        .map(|project| Some(CreateProjectPayload { project }))
        .extend()
    }

    /// Overwrite any non-null fields of an existing project.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatusType>,
        due_date: Option<Date>,
    ) -> Result<Option<UpdateProjectPayload>> {
        let input = UpdateProject {
            name,
            description,
            status: status.map(Into::into),
            due_date,
        };
        update_project(pool(ctx)?, &id, &input)
            .await
            .map(|project| Some(UpdateProjectPayload { project }))
            .extend()
    }

    /// Create a task in an existing project.
    #[allow(clippy::too_many_arguments)]
    async fn create_task(
        &self,
        ctx: &Context<'_>,
        project_id: ID,
        title: String,
        description: Option<String>,
        status: Option<TaskStatusType>,
        assignee_email: Option<String>,
        due_date: Option<Timestamp>,
    ) -> Result<Option<CreateTaskPayload>> {
        let pool = pool(ctx)?;
        let input = CreateTask {
            project_id: parse_id(&project_id).map_err(AppError::from).extend()?,
            title,
            description,
            status: status.map(Into::into),
            assignee_email,
            due_date,
        };
        create_task(pool, &input)
            .await
            .map(|task| Some(CreateTaskPayload { task }))
            .extend()
    }

    /// Overwrite any non-null fields of an existing task.
    #[allow(clippy::too_many_arguments)]
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        description: Option<String>,
        status: Option<TaskStatusType>,
        assignee_email: Option<String>,
        due_date: Option<Timestamp>,
    ) -> Result<Option<UpdateTaskPayload>> {
        let input = UpdateTask {
            title,
            description,
            status: status.map(Into::into),
            assignee_email,
            due_date,
        };
        update_task(pool(ctx)?, &id, &input)
            .await
            .map(|task| Some(UpdateTaskPayload { task }))
            .extend()
    }

    /// Append a comment to an existing task.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
        content: String,
        author_email: String,
    ) -> Result<Option<CreateCommentPayload>> {
        create_comment(pool(ctx)?, &task_id, content, author_email)
            .await
            .map(|comment| Some(CreateCommentPayload { comment }))
            .extend()
    }
}

async fn create_project(
    pool: &DbPool,
    organization_slug: &str,
    name: String,
    description: Option<String>,
    status: Option<ProjectStatusType>,
    due_date: Option<Date>,
) -> AppResult<ProjectType> {
    let organization = OrganizationRepo::find_by_slug(pool, organization_slug)
        .await?
        .ok_or_else(|| AppError::not_found("Organization", organization_slug))?;

    let input = CreateProject {
        organization_id: organization.id,
        name,
        description,
        status: status.map(Into::into),
        due_date,
    };
    let project = ProjectRepo::create(pool, &input).await?;
    tracing::info!(
        project_id = project.id,
        organization = %organization.slug,
        "Project created"
    );
    Ok(ProjectType(project))
}

async fn update_project(pool: &DbPool, id: &ID, input: &UpdateProject) -> AppResult<ProjectType> {
    let id = parse_id(id)?;
    let project = ProjectRepo::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::not_found("Project", id))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(ProjectType(project))
}

async fn create_task(pool: &DbPool, input: &CreateTask) -> AppResult<TaskType> {
    // Resolve the parent first so an unknown project is NOT_FOUND.
    load_project(pool, input.project_id).await?;
    let task = TaskRepo::create(pool, input).await?;
    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");
    Ok(TaskType(task))
}

async fn update_task(pool: &DbPool, id: &ID, input: &UpdateTask) -> AppResult<TaskType> {
    let id = parse_id(id)?;
    let task = TaskRepo::update(pool, id, input)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))?;
    tracing::info!(task_id = id, "Task updated");
    Ok(TaskType(task))
}

async fn create_comment(
    pool: &DbPool,
    task_id: &ID,
    content: String,
    author_email: String,
) -> AppResult<TaskCommentType> {
    let task = load_task(pool, parse_id(task_id)?).await?;
    let comment = TaskCommentRepo::create(
        pool,
        &CreateTaskComment {
            task_id: task.0.id,
            content,
            author_email,
        },
    )
    .await?;
    tracing::info!(comment_id = comment.id, task_id = comment.task_id, "Comment created");
    Ok(TaskCommentType(comment))
}
