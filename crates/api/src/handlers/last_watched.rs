//! Handlers for last-watched progress markers.

use axum::extract::State;
use sj_core::request::LastWatchedRequest;
use sj_db::models::last_watched::LastWatched;
use sj_db::repositories::{LastWatchedRepo, SeriesRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::body::RequestBody;
use crate::response::{success, Envelope};
use crate::state::AppState;

/// POST /api/v1/last-watched
///
/// Records the caller's position in a series, replacing any earlier one.
pub async fn upsert(
    State(state): State<AppState>,
    auth: AuthUser,
    RequestBody(body): RequestBody,
) -> AppResult<Envelope<LastWatched>> {
    let input = LastWatchedRequest::parse(&body)?;
    SeriesRepo::find_by_id(&state.pool, input.series_id).await?;

    let marker = LastWatchedRepo::upsert(
        &state.pool,
        auth.user_id,
        input.series_id,
        input.session,
        input.episode,
    )
    .await?;
    Ok(success(marker))
}

/// GET /api/v1/last-watched
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Envelope<Vec<LastWatched>>> {
    let markers = LastWatchedRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(success(markers))
}
