//! Sample data loader.
//!
//! Writes a small demo dataset straight into storage, bypassing the
//! GraphQL layer. Every row is get-or-create keyed on a natural key, so
//! running the seeder repeatedly leaves the database unchanged after the
//! first run.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use taskhub_core::types::DbId;

use crate::models::organization::{CreateOrganization, Organization};
use crate::models::project::{CreateProject, Project};
use crate::models::status::{ProjectStatus, TaskStatus};
use crate::models::task::{CreateTask, Task};
use crate::models::task_comment::CreateTaskComment;
use crate::repositories::{OrganizationRepo, ProjectRepo, TaskCommentRepo, TaskRepo};

/// How many rows a seeding run inserted, plus table totals afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub organizations_created: u32,
    pub projects_created: u32,
    pub tasks_created: u32,
    pub comments_created: u32,
    pub total_organizations: i64,
    pub total_projects: i64,
    pub total_tasks: i64,
    pub total_comments: i64,
}

impl SeedReport {
    /// True when the run inserted nothing.
    pub fn is_noop(&self) -> bool {
        self.organizations_created == 0
            && self.projects_created == 0
            && self.tasks_created == 0
            && self.comments_created == 0
    }
}

/// Load the sample dataset.
pub async fn seed_sample_data(pool: &PgPool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    let tech = organization(
        pool,
        &mut report,
        "tech-startup",
        "Tech Startup Inc",
        "contact@techstartup.com",
    )
    .await?;
    organization(
        pool,
        &mut report,
        "design-agency",
        "Design Agency",
        "hello@designagency.com",
    )
    .await?;

    let today = Utc::now().date_naive();
    let website = project(
        pool,
        &mut report,
        CreateProject {
            organization_id: tech.id,
            name: "Website Redesign".into(),
            description: Some("Complete overhaul of company website".into()),
            status: Some(ProjectStatus::Active),
            due_date: Some(today + Duration::days(30)),
        },
    )
    .await?;
    project(
        pool,
        &mut report,
        CreateProject {
            organization_id: tech.id,
            name: "Mobile App Development".into(),
            description: Some("New mobile app for iOS and Android".into()),
            status: Some(ProjectStatus::Active),
            due_date: Some(today + Duration::days(60)),
        },
    )
    .await?;

    task(
        pool,
        &mut report,
        sample_task(
            website.id,
            "Create wireframes",
            "Design wireframes for all pages",
            TaskStatus::Done,
            "designer@techstartup.com",
        ),
    )
    .await?;
    let homepage = task(
        pool,
        &mut report,
        sample_task(
            website.id,
            "Develop homepage",
            "Implement homepage with new design",
            TaskStatus::InProgress,
            "dev@techstartup.com",
        ),
    )
    .await?;
    task(
        pool,
        &mut report,
        sample_task(
            website.id,
            "Write content",
            "Update all website copy",
            TaskStatus::Todo,
            "content@techstartup.com",
        ),
    )
    .await?;

    let author = "manager@techstartup.com";
    if TaskCommentRepo::find_by_task_and_author(pool, homepage.id, author)
        .await?
        .is_none()
    {
        TaskCommentRepo::create(
            pool,
            &CreateTaskComment {
                task_id: homepage.id,
                content: "Looking good so far! Can we adjust the header spacing?".into(),
                author_email: author.into(),
            },
        )
        .await?;
        report.comments_created += 1;
        tracing::info!(task = %homepage.title, "Seeded comment");
    }

    report.total_organizations = OrganizationRepo::count(pool).await?;
    report.total_projects = ProjectRepo::count(pool).await?;
    report.total_tasks = TaskRepo::count(pool).await?;
    report.total_comments = TaskCommentRepo::count(pool).await?;

    Ok(report)
}

async fn organization(
    pool: &PgPool,
    report: &mut SeedReport,
    slug: &str,
    name: &str,
    contact_email: &str,
) -> Result<Organization, sqlx::Error> {
    if let Some(existing) = OrganizationRepo::find_by_slug(pool, slug).await? {
        return Ok(existing);
    }
    let created = OrganizationRepo::create(
        pool,
        &CreateOrganization {
            name: name.into(),
            slug: slug.into(),
            contact_email: contact_email.into(),
        },
    )
    .await?;
    report.organizations_created += 1;
    tracing::info!(slug, "Seeded organization");
    Ok(created)
}

async fn project(
    pool: &PgPool,
    report: &mut SeedReport,
    input: CreateProject,
) -> Result<Project, sqlx::Error> {
    if let Some(existing) =
        ProjectRepo::find_by_organization_and_name(pool, input.organization_id, &input.name)
            .await?
    {
        return Ok(existing);
    }
    let created = ProjectRepo::create(pool, &input).await?;
    report.projects_created += 1;
    tracing::info!(name = %created.name, "Seeded project");
    Ok(created)
}

async fn task(pool: &PgPool, report: &mut SeedReport, input: CreateTask) -> Result<Task, sqlx::Error> {
    if let Some(existing) =
        TaskRepo::find_by_project_and_title(pool, input.project_id, &input.title).await?
    {
        return Ok(existing);
    }
    let created = TaskRepo::create(pool, &input).await?;
    report.tasks_created += 1;
    tracing::info!(title = %created.title, "Seeded task");
    Ok(created)
}

fn sample_task(
    project_id: DbId,
    title: &str,
    description: &str,
    status: TaskStatus,
    assignee_email: &str,
) -> CreateTask {
    CreateTask {
        project_id,
        title: title.into(),
        description: Some(description.into()),
        status: Some(status),
        assignee_email: Some(assignee_email.into()),
        due_date: None,
    }
}
