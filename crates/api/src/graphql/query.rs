//! Read-only root fields. Every resolver is a single lookup or filter.

use async_graphql::{Context, Object, Result, ResultExt, ID};
use taskhub_core::id::parse_id;
use taskhub_db::repositories::{OrganizationRepo, ProjectRepo, TaskCommentRepo, TaskRepo};
use taskhub_db::DbPool;

use super::pool;
use super::types::{load_project, load_task, OrganizationType, ProjectType, TaskCommentType, TaskType};
use crate::error::{AppError, AppResult};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every organization, newest first.
    async fn all_organizations(&self, ctx: &Context<'_>) -> Result<Vec<OrganizationType>> {
        all_organizations(pool(ctx)?).await.extend()
    }

    /// One organization by slug. Null (with a `NOT_FOUND` error) if absent.
    async fn organization(
        &self,
        ctx: &Context<'_>,
        slug: String,
    ) -> Result<Option<OrganizationType>> {
        organization_by_slug(pool(ctx)?, &slug).await.map(Some).extend()
    }

    /// Projects belonging to the organization with `organization_slug`.
    async fn projects_by_organization(
        &self,
        ctx: &Context<'_>,
        organization_slug: String,
    ) -> Result<Vec<ProjectType>> {
        projects_by_organization(pool(ctx)?, &organization_slug)
            .await
            .extend()
    }

    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<ProjectType>> {
        project(pool(ctx)?, &id).await.map(Some).extend()
    }

    async fn tasks_by_project(&self, ctx: &Context<'_>, project_id: ID) -> Result<Vec<TaskType>> {
        tasks_by_project(pool(ctx)?, &project_id).await.extend()
    }

    async fn task(&self, ctx: &Context<'_>, id: ID) -> Result<Option<TaskType>> {
        task(pool(ctx)?, &id).await.map(Some).extend()
    }

    /// Comments on a task, oldest first.
    async fn comments_by_task(
        &self,
        ctx: &Context<'_>,
        task_id: ID,
    ) -> Result<Vec<TaskCommentType>> {
        comments_by_task(pool(ctx)?, &task_id).await.extend()
    }
}

async fn all_organizations(pool: &DbPool) -> AppResult<Vec<OrganizationType>> {
    let orgs = OrganizationRepo::list(pool).await?;
    Ok(orgs.into_iter().map(OrganizationType).collect())
}

async fn organization_by_slug(pool: &DbPool, slug: &str) -> AppResult<OrganizationType> {
    OrganizationRepo::find_by_slug(pool, slug)
        .await?
        .map(OrganizationType)
        .ok_or_else(|| AppError::not_found("Organization", slug))
}

async fn projects_by_organization(pool: &DbPool, slug: &str) -> AppResult<Vec<ProjectType>> {
    let projects = ProjectRepo::list_by_organization_slug(pool, slug).await?;
    Ok(projects.into_iter().map(ProjectType).collect())
}

async fn project(pool: &DbPool, id: &ID) -> AppResult<ProjectType> {
    load_project(pool, parse_id(id)?).await
}

async fn tasks_by_project(pool: &DbPool, project_id: &ID) -> AppResult<Vec<TaskType>> {
    let tasks = TaskRepo::list_by_project(pool, parse_id(project_id)?).await?;
    Ok(tasks.into_iter().map(TaskType).collect())
}

async fn task(pool: &DbPool, id: &ID) -> AppResult<TaskType> {
    load_task(pool, parse_id(id)?).await
}

async fn comments_by_task(pool: &DbPool, task_id: &ID) -> AppResult<Vec<TaskCommentType>> {
    let comments = TaskCommentRepo::list_by_task(pool, parse_id(task_id)?).await?;
    Ok(comments.into_iter().map(TaskCommentType).collect())
}
