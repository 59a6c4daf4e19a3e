use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Everything a handler can fail with, mapped onto the wire contract.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input")]
    Validation,

    #[error("User not found")]
    UserNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Store(err) => {
                tracing::error!("database error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
