use axum::routing::{get, put};
use axum::Router;

use crate::handlers::activity_handlers::{
    delete_activity, get_activity, log_activity, update_activity,
};
use crate::state::AppState;

pub fn activity_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/users/{userId}/activity",
            get(get_activity).post(log_activity),
        )
        .route(
            "/users/{userId}/activity/{activityId}",
            put(update_activity).delete(delete_activity),
        )
        .with_state(state)
}
