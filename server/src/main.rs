mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use routes::{activity::activity_routes, users::user_routes};
use state::AppState;
use store::mysql::MySqlStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = match db::connect().await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("Error connecting to MySQL database: {err}");
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to MySQL database");

    let state = AppState::new(Arc::new(MySqlStore::new(pool)));

    let app = Router::new()
        .nest("/api", user_routes(state.clone()))
        .nest("/api", activity_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    tracing::info!("Server running at http://{}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
