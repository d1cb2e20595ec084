//! Failure envelopes for errors raised by middleware rather than handlers.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::BoxError;

use crate::error::AppError;

/// Error handler for the timeout layer.
pub async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request timed out");
        return AppError::Timeout.into_response();
    }
    AppError::InternalError(format!("Unhandled middleware error: {err}")).into_response()
}

/// Response for a handler that panicked.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("Handler panicked: {detail}")).into_response()
}
