use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0} is missing")]
    MissingField(String),

    #[error("Wrong value in {0}")]
    WrongType(String),

    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Service unavailable: {0}")]
    Transient(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a lookup by numeric id that matched nothing.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound {
            entity,
            key: id.to_string(),
        }
    }
}
