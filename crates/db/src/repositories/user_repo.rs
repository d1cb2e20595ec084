//! Repository for the `users` table.

use sj_core::hashing::hash_password;
use sj_core::types::DbId;

use crate::models::user::User;
use crate::{health_check, DbError, DbPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, password";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning its generated id.
    ///
    /// The plaintext password is hashed before it reaches the database. A
    /// taken name fails with [`DbError::AlreadyExists`].
    pub async fn create(pool: &DbPool, name: &str, plaintext: &str) -> Result<DbId, DbError> {
        health_check(pool).await?;
        let digest = hash_password(plaintext);
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (name, password) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(&digest)
        .fetch_one(pool)
        .await
        .map_err(|e| match DbError::from(e) {
            DbError::AlreadyExists(_) => DbError::AlreadyExists(format!("User {name} already exists")),
            other => other,
        })?;
        tracing::info!(user_id = id, name, "User created");
        Ok(id)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<User, DbError> {
        health_check(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("User", id))
    }

    /// Find a user by name (case-sensitive).
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<User, DbError> {
        health_check(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM users WHERE name = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("User", format!("'{name}'")))
    }
}
