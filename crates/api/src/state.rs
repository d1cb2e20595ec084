use std::sync::Arc;

use crate::auth::session::SessionAuthenticator;
use crate::config::ServerConfig;
use crate::images::{ImageFetcher, ImageStore};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: sj_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Session capability used by [`crate::middleware::auth::AuthUser`] and sign-in.
    pub sessions: Arc<dyn SessionAuthenticator>,
    /// Downloads series images.
    pub image_fetcher: Arc<dyn ImageFetcher>,
    /// Stores series images on disk.
    pub image_store: ImageStore,
}
