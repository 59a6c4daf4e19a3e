use async_trait::async_trait;
use sqlx::MySqlPool;

use super::{ActivityStore, StoreError};
use crate::models::activity::{Activity, ActivityFilter, NewActivity};
use crate::models::user::NewUser;

/// `ActivityStore` over a MySQL pool. Every statement binds its values
/// positionally; nothing from the request is interpolated into SQL text.
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlStore { pool }
    }
}

/// Builds the activity listing statement: a fixed `user_id` predicate,
/// then one `AND` clause per present filter, in binding order.
fn list_activity_sql(filter: &ActivityFilter) -> String {
    let mut sql = String::from(
        "SELECT id, user_id, action_type, ip_address, browser_info, timestamp \
         FROM user_activity WHERE user_id = ?",
    );
    if filter.action_type.is_some() {
        sql.push_str(" AND action_type = ?");
    }
    if filter.start_timestamp.is_some() {
        sql.push_str(" AND timestamp >= ?");
    }
    if filter.end_timestamp.is_some() {
        sql.push_str(" AND timestamp <= ?");
    }
    sql
}

#[async_trait]
impl ActivityStore for MySqlStore {
    async fn create_user(&self, user: &NewUser) -> Result<u64, StoreError> {
        let result = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.role)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    async fn delete_user(&self, user_id: u64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn insert_activity(&self, user_id: u64, activity: &NewActivity) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO user_activity (user_id, action_type, ip_address, browser_info) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(&activity.action_type)
        .bind(&activity.ip_address)
        .bind(&activity.browser_info)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn list_activity(
        &self,
        user_id: u64,
        filter: &ActivityFilter,
    ) -> Result<Vec<Activity>, StoreError> {
        let sql = list_activity_sql(filter);

        let mut query = sqlx::query_as::<_, Activity>(&sql).bind(user_id);
        if let Some(action_type) = &filter.action_type {
            query = query.bind(action_type);
        }
        if let Some(start) = filter.start_timestamp {
            query = query.bind(start);
        }
        if let Some(end) = filter.end_timestamp {
            query = query.bind(end);
        }

        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn update_activity(
        &self,
        user_id: u64,
        activity_id: u64,
        activity: &NewActivity,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            "UPDATE user_activity SET action_type = ?, ip_address = ?, browser_info = ? \
             WHERE id = ? AND user_id = ?",
        )
        .bind(&activity.action_type)
        .bind(&activity.ip_address)
        .bind(&activity.browser_info)
        .bind(activity_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_activity(&self, user_id: u64, activity_id: u64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM user_activity WHERE id = ? AND user_id = ?")
            .bind(activity_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
