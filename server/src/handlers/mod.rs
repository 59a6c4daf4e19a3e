pub mod activity_handlers;
pub mod user_handlers;

use crate::error::ApiError;

/// Required-field check matching the wire contract: present and non-empty.
pub fn require(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::Validation),
    }
}
