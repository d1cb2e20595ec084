use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sj_core::error::CoreError;
use sj_db::DbError;

use crate::images::ImageError;
use crate::response::FailResponse;

/// Message shown to clients in place of internal error details.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`DbError`] for domain and persistence errors and
/// adds HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sj_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error from `sj_db`.
    #[error(transparent)]
    Database(#[from] DbError),

    /// Downloading or storing a series image failed.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The request ran past the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// The `Err` text of the failure envelope.
    ///
    /// Internal and unclassified database failures are logged and replaced by a
    /// generic message; everything else is shown as-is.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Core(CoreError::Internal(msg)) | AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                INTERNAL_MESSAGE.to_string()
            }
            AppError::Database(DbError::Query(err)) => {
                tracing::error!(error = %err, "Database error");
                INTERNAL_MESSAGE.to_string()
            }
            AppError::Image(ImageError::Io(err)) => {
                tracing::error!(error = %err, "Image storage error");
                INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.client_message();
        tracing::debug!(error = %self, "Request failed");

        // Outcome travels in the body; the status line is always 200.
        (StatusCode::OK, Json(FailResponse::new(message))).into_response()
    }
}
