use std::env;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

/// Opens the MySQL pool from `DATABASE_URL`.
pub async fn connect() -> Result<MySqlPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
}
