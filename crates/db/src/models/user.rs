//! User entity model and its public representation.

use serde::Serialize;
use sj_core::types::DbId;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password digest -- NEVER serialize this to API responses.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub password: String,
}

/// Safe user representation for API responses (no password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    #[serde(rename = "ID")]
    pub id: DbId,
    #[serde(rename = "Name")]
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
