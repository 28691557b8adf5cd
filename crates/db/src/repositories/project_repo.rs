//! Repository for the `projects` table.

use sqlx::PgPool;
use taskhub_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, organization_id, name, description, status, due_date, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Omitted `description` becomes `''` and omitted `status` becomes `ACTIVE`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (organization_id, name, description, status, due_date)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'ACTIVE'), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.organization_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects belonging to one organization, newest first.
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE organization_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }

    /// List projects of the organization with the given slug, newest first.
    ///
    /// An unknown slug yields an empty list rather than an error.
    pub async fn list_by_organization_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE organization_id = (SELECT id FROM organizations WHERE slug = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_all(pool)
            .await
    }

    /// Find a project by organization and exact name.
    pub async fn find_by_organization_and_name(
        pool: &PgPool,
        organization_id: DbId,
        name: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE organization_id = $1 AND name = $2
             ORDER BY id
             LIMIT 1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(organization_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Total number of projects across all organizations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// An empty update writes nothing and returns the row as stored.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        if input.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                due_date = COALESCE($5, due_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }
}
