//! API Routes
//!
//! Route handlers organized by entity.

pub mod authors;
pub mod health;
pub mod quotes;
pub mod tags;

use uuid::Uuid;

use crate::api::error::ApiError;

/// Parse a path segment as an entity id
///
/// Anything that is not a UUID cannot name an entity, so it is a 404, not a
/// 400.
pub(crate) fn parse_id(entity: &'static str, raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(format!("{} {} not found", entity, raw)))
}
