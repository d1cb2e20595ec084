//! Sign-in handler.

use axum::extract::State;
use serde::Serialize;
use sj_core::error::CoreError;
use sj_core::request::SignInRequest;
use sj_core::types::DbId;
use sj_db::user_store::{SqlUserStore, UserStore};
use sj_db::DbError;

use crate::error::AppResult;
use crate::middleware::body::RequestBody;
use crate::response::{success, Envelope};
use crate::state::AppState;

/// Generic message for any bad credential, so names cannot be probed.
const INVALID_CREDENTIALS: &str = "Invalid name or password";

/// Successful sign-in payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignInResponse {
    pub token: String,
    #[serde(rename = "UserID")]
    pub user_id: DbId,
}

/// POST /api/v1/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> AppResult<Envelope<SignInResponse>> {
    let input = SignInRequest::parse(&body)?;
    let store = SqlUserStore::new(state.pool.clone());

    let identity = match store.find_user(&input.name).await {
        Ok(identity) => identity,
        Err(DbError::NotFound { .. }) => {
            tracing::debug!(name = %input.name, "Sign-in for unknown user");
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
        }
        Err(err) => return Err(err.into()),
    };

    if !identity.validate_password(&input.password) {
        tracing::debug!(name = %input.name, "Sign-in with wrong password");
        return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
    }

    let user_id: DbId = identity
        .id()
        .parse()
        .map_err(|_| CoreError::Internal(format!("non-numeric identity '{}'", identity.id())))?;
    let token = state.sessions.issue(user_id)?;

    tracing::info!(user_id, "User signed in");
    Ok(success(SignInResponse { token, user_id }))
}
