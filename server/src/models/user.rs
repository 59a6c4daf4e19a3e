use serde::{Serialize, Deserialize};

/// Insert shape for the `users` table; the id is generated by the database.
/// The password is stored as received.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}
