//! Handlers for the `/series` resource.
//!
//! Creating and removing a series touches three places: the image directory,
//! the `series` table and the caller's series list. There is no transaction
//! spanning the file system, so each step that fails undoes the steps before
//! it on a best-effort basis.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use sj_core::error::CoreError;
use sj_core::images::image_file_name;
use sj_core::request::NewSeriesRequest;
use sj_db::models::series::Series;
use sj_db::repositories::{SeriesListRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::middleware::auth::AuthUser;
use crate::middleware::body::RequestBody;
use crate::response::{success, Envelope};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
}

/// POST /api/v1/series
///
/// Downloads the image, stores it, creates the series and appends it to the
/// caller's list.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    RequestBody(body): RequestBody,
) -> AppResult<Envelope<Series>> {
    let input = NewSeriesRequest::parse(&body)?;

    let content = state.image_fetcher.fetch(&input.image).await?;
    let file_name = image_file_name(&input.image, &content);
    state.image_store.save(&file_name, &content).await?;

    let series_id = match SeriesRepo::create(&state.pool, &input.title, &file_name).await {
        Ok(id) => id,
        Err(err) => {
            discard_unreferenced_image(&state, &file_name).await;
            return Err(err.into());
        }
    };

    if let Err(err) = SeriesListRepo::append(&state.pool, auth.user_id, series_id).await {
        if let Err(cleanup) = SeriesRepo::delete(&state.pool, series_id).await {
            tracing::warn!(series_id, error = %cleanup, "Could not roll back series row");
        }
        discard_unreferenced_image(&state, &file_name).await;
        return Err(err.into());
    }

    tracing::info!(series_id, user_id = auth.user_id, image = %file_name, "Series created");
    Ok(success(Series {
        id: series_id,
        title: input.title,
        image: file_name,
    }))
}

/// GET /api/v1/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<Series>> {
    let id = parse_id(&raw_id)?;
    let series = SeriesRepo::find_by_id(&state.pool, id).await?;
    Ok(success(series))
}

/// GET /api/v1/series?title=...
pub async fn find_by_title(
    State(state): State<AppState>,
    query: Result<Query<TitleQuery>, QueryRejection>,
) -> AppResult<Envelope<Series>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let title = query
        .title
        .ok_or_else(|| CoreError::MissingField("title".into()))?;
    let series = SeriesRepo::find_by_title(&state.pool, &title).await?;
    Ok(success(series))
}

/// DELETE /api/v1/series/{id}
///
/// Removes the series from the caller's list, deletes the series row and
/// deletes its image once no other series refers to it.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(raw_id): Path<String>,
) -> AppResult<Envelope<Series>> {
    let id = parse_id(&raw_id)?;
    let series = SeriesRepo::find_by_id(&state.pool, id).await?;

    let removed = SeriesListRepo::remove(&state.pool, auth.user_id, id).await?;
    if removed == 0 {
        return Err(AppError::Core(CoreError::not_found("Series list entry", id)));
    }

    if let Err(err) = SeriesRepo::delete(&state.pool, id).await {
        if let Err(restore) = SeriesListRepo::append(&state.pool, auth.user_id, id).await {
            tracing::error!(series_id = id, error = %restore, "Could not restore series list entry");
        }
        return Err(err.into());
    }

    discard_unreferenced_image(&state, &series.image).await;

    tracing::info!(series_id = id, user_id = auth.user_id, "Series removed");
    Ok(success(series))
}

/// Delete `file_name` from the image directory when no series row refers to it.
///
/// Failures are logged, never returned: this only runs as cleanup after the
/// request outcome is already decided.
async fn discard_unreferenced_image(state: &AppState, file_name: &str) {
    match SeriesRepo::count_with_image(&state.pool, file_name).await {
        Ok(0) => {
            if let Err(err) = state.image_store.remove(file_name).await {
                tracing::warn!(file_name, error = %err, "Could not remove image");
            }
        }
        Ok(remaining) => {
            tracing::debug!(file_name, remaining, "Image still referenced, keeping it");
        }
        Err(err) => {
            tracing::warn!(file_name, error = %err, "Could not count image references, keeping it");
        }
    }
}
