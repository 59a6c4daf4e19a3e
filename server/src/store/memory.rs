use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use super::{ActivityStore, StoreError};
use crate::models::activity::{Activity, ActivityFilter, NewActivity};
use crate::models::user::NewUser;

/// In-memory stand-in for [`super::mysql::MySqlStore`], so handler tests
/// run without a live database.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    fail: bool,
}

#[derive(Default)]
struct Inner {
    users: Vec<(u64, NewUser)>,
    activity: Vec<Activity>,
    next_user_id: u64,
    next_activity_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// A store whose every call fails, for exercising the 500 path.
    pub fn failing() -> Self {
        MemoryStore {
            inner: Mutex::default(),
            fail: true,
        }
    }

    /// Seeds a row directly, bypassing the server-assigned timestamp.
    pub fn push_activity(&self, activity: Activity) {
        self.inner.lock().unwrap().activity.push(activity);
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn activity_count(&self) -> usize {
        self.inner.lock().unwrap().activity.len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityStore for MemoryStore {
    async fn create_user(&self, user: &NewUser) -> Result<u64, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_user_id += 1;
        let id = inner.next_user_id;
        inner.users.push((id, user.clone()));
        Ok(id)
    }

    async fn delete_user(&self, user_id: u64) -> Result<u64, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.users.len();
        inner.users.retain(|(id, _)| *id != user_id);
        Ok((before - inner.users.len()) as u64)
    }

    async fn insert_activity(&self, user_id: u64, activity: &NewActivity) -> Result<u64, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_activity_id += 1;
        let id = inner.next_activity_id;
        let row = Activity {
            id,
            user_id,
            action_type: activity.action_type.clone(),
            ip_address: activity.ip_address.clone(),
            browser_info: activity.browser_info.clone(),
            timestamp: Utc::now().naive_utc(),
        };
        inner.activity.push(row);
        Ok(id)
    }

    async fn list_activity(
        &self,
        user_id: u64,
        filter: &ActivityFilter,
    ) -> Result<Vec<Activity>, StoreError> {
        self.check()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .activity
            .iter()
            .filter(|row| row.user_id == user_id)
            .filter(|row| {
                filter
                    .action_type
                    .as_deref()
                    .map_or(true, |action_type| row.action_type == action_type)
            })
            .filter(|row| {
                filter
                    .start_timestamp
                    .map_or(true, |start| row.timestamp >= start)
            })
            .filter(|row| filter.end_timestamp.map_or(true, |end| row.timestamp <= end))
            .cloned()
            .collect())
    }

    async fn update_activity(
        &self,
        user_id: u64,
        activity_id: u64,
        activity: &NewActivity,
    ) -> Result<u64, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let mut affected = 0;
        for row in inner
            .activity
            .iter_mut()
            .filter(|row| row.id == activity_id && row.user_id == user_id)
        {
            row.action_type = activity.action_type.clone();
            row.ip_address = activity.ip_address.clone();
            row.browser_info = activity.browser_info.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_activity(&self, user_id: u64, activity_id: u64) -> Result<u64, StoreError> {
        self.check()?;
        let mut inner = self.inner.lock().unwrap();
        let before = inner.activity.len();
        inner
            .activity
            .retain(|row| !(row.id == activity_id && row.user_id == user_id));
        Ok((before - inner.activity.len()) as u64)
    }
}
