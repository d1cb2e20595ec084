use sj_core::error::CoreError;

/// Errors surfaced by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A read-by-key matched zero rows.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// A unique constraint rejected the write.
    #[error("{0}")]
    AlreadyExists(String),

    /// The database could not be reached.
    #[error("Database unavailable: {0}")]
    Transient(#[source] sqlx::Error),

    /// Any other failure reported by the driver.
    #[error("Database error: {0}")]
    Query(#[source] sqlx::Error),
}

impl DbError {
    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound {
                entity: "Row",
                key: "requested".into(),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => Self::Transient(err),
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                let constraint = db_err.constraint().unwrap_or("unique constraint");
                Self::AlreadyExists(format!("Duplicate value violates {constraint}"))
            }
            other => Self::Query(other),
        }
    }
}

impl From<DbError> for CoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, key } => CoreError::NotFound { entity, key },
            DbError::AlreadyExists(msg) => CoreError::AlreadyExists(msg),
            DbError::Transient(e) => CoreError::Transient(e.to_string()),
            DbError::Query(e) => CoreError::Internal(e.to_string()),
        }
    }
}
