//! Route definitions for the `/series` resource and its episode resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{episode_resource, series};
use crate::state::AppState;

/// Routes mounted at `/series`.
///
/// ```text
/// GET    /?title=...          -> find_by_title
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// DELETE /{id}                -> delete
/// GET    /{id}/resources      -> list_by_series
/// POST   /{id}/resources      -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(series::find_by_title).post(series::create))
        .route("/{id}", get(series::get_by_id).delete(series::delete))
        .route(
            "/{id}/resources",
            get(episode_resource::list_by_series).post(episode_resource::create),
        )
}
