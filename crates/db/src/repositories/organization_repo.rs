//! Repository for the `organizations` table.

use sqlx::PgPool;
use taskhub_core::types::DbId;

use crate::models::organization::{CreateOrganization, Organization};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, contact_email, created_at, updated_at";

/// Provides CRUD operations for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Insert a new organization, returning the created row.
    ///
    /// Fails with a unique violation on `uq_organizations_slug` if the slug
    /// is already taken.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizations (name, slug, contact_email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.contact_email)
            .fetch_one(pool)
            .await
    }

    /// Find an organization by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an organization by its unique slug.
    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE slug = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all organizations, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Organization>(&query)
            .fetch_all(pool)
            .await
    }

    /// Total number of organizations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM organizations")
            .fetch_one(pool)
            .await
    }

    /// Permanently delete an organization. Projects, tasks, and comments
    /// beneath it go with it via `ON DELETE CASCADE`.
    ///
    /// Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM organizations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
