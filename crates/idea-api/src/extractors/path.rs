//! Path parameter parsing
//!
//! IDs arrive as strings so a malformed value answers with the uniform
//! error envelope instead of axum's default rejection.

use uuid::Uuid;

use crate::response::ApiError;

/// Parse a path segment as a UUID, naming the parameter in the error
pub fn parse_id(raw: &str, param: &str) -> Result<Uuid, ApiError> {
    raw.parse::<Uuid>()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {param} format")))
}
