//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the entity
//!   supports updates

pub mod organization;
pub mod project;
pub mod status;
pub mod task;
pub mod task_comment;
