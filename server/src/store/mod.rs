use async_trait::async_trait;
use thiserror::Error;

use crate::models::activity::{Activity, ActivityFilter, NewActivity};
use crate::models::user::NewUser;

#[cfg(test)]
pub mod memory;
pub mod mysql;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

/// Data access behind the HTTP handlers. One method per statement the
/// service issues; mutating methods report the generated id or the
/// affected-row count so handlers can do existence checks.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn create_user(&self, user: &NewUser) -> Result<u64, StoreError>;

    async fn delete_user(&self, user_id: u64) -> Result<u64, StoreError>;

    async fn insert_activity(&self, user_id: u64, activity: &NewActivity) -> Result<u64, StoreError>;

    async fn list_activity(
        &self,
        user_id: u64,
        filter: &ActivityFilter,
    ) -> Result<Vec<Activity>, StoreError>;

    async fn update_activity(
        &self,
        user_id: u64,
        activity_id: u64,
        activity: &NewActivity,
    ) -> Result<u64, StoreError>;

    async fn delete_activity(&self, user_id: u64, activity_id: u64) -> Result<u64, StoreError>;
}
