//! Bridge between the `users` table and session authentication.
//!
//! Sign-in only needs two capabilities from the user table: look a user up by
//! name and check a candidate password against the stored digest.
//! [`UserStore`] and [`Identity`] describe exactly that, and [`SqlUserStore`]
//! provides them on top of [`UserRepo`].

use async_trait::async_trait;
use sj_core::hashing::hash_password;
use sj_core::types::DbId;

use crate::models::user::User;
use crate::repositories::UserRepo;
use crate::{DbError, DbPool};

/// A user as seen by the session layer.
pub trait Identity: Send + Sync {
    /// Opaque identifier stored in the session (the decimal user id).
    fn id(&self) -> String;

    /// Stored password digest.
    fn password(&self) -> &str;

    /// Hash `candidate` and compare it with the stored digest.
    fn validate_password(&self, candidate: &str) -> bool {
        hash_password(candidate) == self.password()
    }
}

/// Lookup of identities by user name.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`DbError::NotFound`] when no user has this name.
    async fn find_user(&self, name: &str) -> Result<Box<dyn Identity>, DbError>;
}

/// [`Identity`] backed by a `users` row.
#[derive(Debug, Clone)]
pub struct StoredIdentity {
    user_id: DbId,
    password: String,
}

impl StoredIdentity {
    pub fn user_id(&self) -> DbId {
        self.user_id
    }
}

impl From<User> for StoredIdentity {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            password: user.password,
        }
    }
}

impl Identity for StoredIdentity {
    fn id(&self) -> String {
        self.user_id.to_string()
    }

    fn password(&self) -> &str {
        &self.password
    }
}

/// [`UserStore`] over the database pool.
#[derive(Clone)]
pub struct SqlUserStore {
    pool: DbPool,
}

impl SqlUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn find_user(&self, name: &str) -> Result<Box<dyn Identity>, DbError> {
        let user = UserRepo::find_by_name(&self.pool, name).await?;
        Ok(Box::new(StoredIdentity::from(user)))
    }
}
