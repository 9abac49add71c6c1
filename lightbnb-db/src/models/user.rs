//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User row from `users`
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Stored credential, never serialized back out
    #[serde(skip_serializing)]
    pub password: String,
}

/// Registration payload for [`crate::UserRepo::create`]
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
