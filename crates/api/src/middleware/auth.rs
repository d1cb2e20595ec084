//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sj_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved by the [`AppState::sessions`] capability.
///
/// Use this as an extractor parameter in any handler that requires a session:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Envelope<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(success(()))
/// }
/// ```
///
/// A failed lookup rejects with an `Unauthorized` failure envelope.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = state.sessions.authenticate(&parts.headers)?;
        Ok(AuthUser { user_id })
    }
}
