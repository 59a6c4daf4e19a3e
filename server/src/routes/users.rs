use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::user_handlers::{create_user, delete_user};
use crate::state::AppState;

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{userId}", delete(delete_user))
        .with_state(state)
}
