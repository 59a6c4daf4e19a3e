use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::require;
use crate::models::user::NewUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserPayload {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let user = NewUser {
        username: require(payload.username)?,
        password: require(payload.password)?,
        role: require(payload.role)?,
    };

    let user_id = state.store.create_user(&user).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "User created", "userId": user_id })),
    ))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    let affected = state.store.delete_user(user_id).await?;
    if affected == 0 {
        return Err(ApiError::UserNotFound);
    }

    Ok((StatusCode::OK, Json(json!({ "status": "User deleted" }))))
}
