//! Handlers for episode resources (named links attached to a series).

use axum::extract::{Path, State};
use sj_core::request::NewEpisodeResourceRequest;
use sj_db::models::episode_resource::EpisodeResource;
use sj_db::repositories::{EpisodeResourceRepo, SeriesRepo};

use crate::error::AppResult;
use crate::handlers::parse_id;
use crate::middleware::auth::AuthUser;
use crate::middleware::body::RequestBody;
use crate::response::{success, Envelope};
use crate::state::AppState;

/// POST /api/v1/series/{id}/resources
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_series_id): Path<String>,
    RequestBody(body): RequestBody,
) -> AppResult<Envelope<EpisodeResource>> {
    let series_id = parse_id(&raw_series_id)?;
    let input = NewEpisodeResourceRequest::parse(&body)?;

    SeriesRepo::find_by_id(&state.pool, series_id).await?;
    let id = EpisodeResourceRepo::create(&state.pool, series_id, &input.name, &input.url).await?;

    tracing::info!(resource_id = id, series_id, user_id = auth.user_id, "Episode resource created");
    Ok(success(EpisodeResource {
        id,
        series_id,
        name: input.name,
        url: input.url,
    }))
}

/// GET /api/v1/series/{id}/resources
pub async fn list_by_series(
    State(state): State<AppState>,
    Path(raw_series_id): Path<String>,
) -> AppResult<Envelope<Vec<EpisodeResource>>> {
    let series_id = parse_id(&raw_series_id)?;
    SeriesRepo::find_by_id(&state.pool, series_id).await?;
    let resources = EpisodeResourceRepo::list_by_series(&state.pool, series_id).await?;
    Ok(success(resources))
}

/// GET /api/v1/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<EpisodeResource>> {
    let id = parse_id(&raw_id)?;
    let resource = EpisodeResourceRepo::find_by_id(&state.pool, id).await?;
    Ok(success(resource))
}
