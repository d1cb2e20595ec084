//! Handlers for the `/users` resource.

use axum::extract::State;
use sj_core::error::CoreError;
use sj_core::request::NewUserRequest;
use sj_db::models::user::UserResponse;
use sj_db::repositories::UserRepo;
use sj_db::DbError;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::body::RequestBody;
use crate::response::{success, Envelope};
use crate::state::AppState;

/// POST /api/v1/users
///
/// Registers an account. Names are unique; the password is stored as a digest.
pub async fn create(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> AppResult<Envelope<UserResponse>> {
    let input = NewUserRequest::parse(&body)?;

    match UserRepo::find_by_name(&state.pool, &input.name).await {
        Ok(_) => {
            return Err(CoreError::AlreadyExists(format!("User {} already exists", input.name)).into())
        }
        Err(DbError::NotFound { .. }) => {}
        Err(err) => return Err(err.into()),
    }

    // The unique index still guards against a concurrent registration.
    let id = UserRepo::create(&state.pool, &input.name, &input.password).await?;

    tracing::info!(user_id = id, name = %input.name, "User created");
    Ok(success(UserResponse {
        id,
        name: input.name,
    }))
}

/// GET /api/v1/users/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> AppResult<Envelope<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id).await?;
    Ok(success(UserResponse::from(user)))
}
