//! Parsing of opaque client-facing identifiers.
//!
//! Identifiers travel over the wire as numeric strings (GraphQL `ID`) and
//! map onto BIGSERIAL primary keys.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a wire identifier into a database id.
///
/// Surrounding whitespace is tolerated; anything that is not a positive
/// integer is a [`CoreError::Validation`].
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    let trimmed = raw.trim();
    match trimmed.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(format!(
            "'{raw}' is not a valid identifier"
        ))),
    }
}
