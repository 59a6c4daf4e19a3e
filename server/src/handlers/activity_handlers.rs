use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::require;
use crate::models::activity::{ActivityFilter, NewActivity};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ActivityPayload {
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub browser_info: Option<String>,
}

pub async fn log_activity(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Json(payload): Json<ActivityPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let activity = NewActivity {
        action_type: require(payload.action_type)?,
        ip_address: require(payload.ip_address)?,
        browser_info: require(payload.browser_info)?,
    };

    state.store.insert_activity(user_id, &activity).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "Activity logged" })),
    ))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    Query(filter): Query<ActivityFilter>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = state.store.list_activity(user_id, &filter).await?;
    Ok((StatusCode::OK, Json(rows)))
}

pub async fn update_activity(
    State(state): State<AppState>,
    Path((user_id, activity_id)): Path<(u64, u64)>,
    Json(payload): Json<ActivityPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let activity = NewActivity {
        action_type: require(payload.action_type)?,
        ip_address: require(payload.ip_address)?,
        browser_info: require(payload.browser_info)?,
    };

    // No existence check here: zero affected rows still reports success.
    state
        .store
        .update_activity(user_id, activity_id, &activity)
        .await?;

    Ok((StatusCode::OK, Json(json!({ "status": "Activity updated" }))))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path((user_id, activity_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.delete_activity(user_id, activity_id).await?;

    Ok((StatusCode::OK, Json(json!({ "status": "Activity deleted" }))))
}
