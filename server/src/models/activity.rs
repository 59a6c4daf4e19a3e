use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

/// Row shape of the `user_activity` table.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Activity {
    pub id: u64,
    pub user_id: u64,
    pub action_type: String,
    pub ip_address: String,
    pub browser_info: String,
    pub timestamp: NaiveDateTime,
}

/// Insert/update shape; `user_id` comes from the path and the timestamp
/// is assigned by the database.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewActivity {
    pub action_type: String,
    pub ip_address: String,
    pub browser_info: String,
}

/// Optional query filters for listing activity. An absent filter
/// contributes no predicate.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ActivityFilter {
    pub action_type: Option<String>,
    pub start_timestamp: Option<NaiveDateTime>,
    pub end_timestamp: Option<NaiveDateTime>,
}
