//! Handlers for the caller's series list.

use axum::extract::State;
use sj_core::request::SeriesListRequest;
use sj_db::models::series::Series;
use sj_db::repositories::{SeriesListRepo, SeriesRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::body::RequestBody;
use crate::response::{success, Envelope};
use crate::state::AppState;

/// POST /api/v1/series-list
///
/// Appending a series already on the list is a no-op.
pub async fn append(
    State(state): State<AppState>,
    auth: AuthUser,
    RequestBody(body): RequestBody,
) -> AppResult<Envelope<&'static str>> {
    let input = SeriesListRequest::parse(&body)?;
    SeriesRepo::find_by_id(&state.pool, input.series_id).await?;
    SeriesListRepo::append(&state.pool, auth.user_id, input.series_id).await?;
    Ok(success(""))
}

/// GET /api/v1/series-list
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<Envelope<Vec<Series>>> {
    let series = SeriesListRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(success(series))
}
