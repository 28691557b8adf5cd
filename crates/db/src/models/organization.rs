//! Organization (tenant) entity model and DTOs.

use sqlx::FromRow;
use taskhub_core::types::{DbId, Timestamp};

/// An organization row from the `organizations` table.
#[derive(Debug, Clone, FromRow)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub contact_email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new organization. Organizations are created by
/// administrative tooling, never through the GraphQL API.
#[derive(Debug, Clone)]
pub struct CreateOrganization {
    pub name: String,
    pub slug: String,
    pub contact_email: String,
}
