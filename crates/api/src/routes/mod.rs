pub mod health;
pub mod series;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{episode_resource, last_watched, series_list, session, users};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sign-in                         sign in (public)
/// /users                           register (public)
/// /users/me                        current user
///
/// /series                          create; find by ?title=
/// /series/{id}                     get, delete
/// /series/{id}/resources           list, create episode resources
/// /resources/{id}                  get episode resource
///
/// /series-list                     list, append
/// /last-watched                    list, upsert
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-in", post(session::sign_in))
        .route("/users", post(users::create))
        .route("/users/me", get(users::me))
        .nest("/series", series::router())
        .route("/resources/{id}", get(episode_resource::get_by_id))
        .route("/series-list", get(series_list::list).post(series_list::append))
        .route(
            "/last-watched",
            get(last_watched::list).post(last_watched::upsert),
        )
}
