//! Persistence layer: connection pool, migrations, models and repositories.
//!
//! The pool is an [`sqlx::AnyPool`] so the same repositories run against
//! PostgreSQL in production and SQLite in development and tests. All SQL in
//! this crate sticks to the dialect subset both backends accept (`$n`
//! placeholders, `RETURNING`, `ON CONFLICT`).

use sqlx::any::AnyPoolOptions;
use sqlx::Connection;

pub mod error;
pub mod models;
pub mod repositories;
pub mod user_store;

pub use error::DbError;

pub type DbPool = sqlx::AnyPool;

/// Database engines the migrations are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Infer the backend from a connection URL scheme.
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split(':').next()?;
        match scheme {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();
    AnyPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Create a single-connection in-memory SQLite pool.
///
/// An in-memory database lives exactly as long as its connection, so the
/// pool never recycles it.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();
    AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// Liveness ping run before every repository statement.
///
/// Any failure to obtain or ping a connection is reported as
/// [`DbError::Transient`].
pub async fn health_check(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await.map_err(DbError::Transient)?;
    conn.ping().await.map_err(DbError::Transient)
}

/// Apply the bundled migrations for `backend`.
pub async fn run_migrations(
    pool: &DbPool,
    backend: Backend,
) -> Result<(), sqlx::migrate::MigrateError> {
    match backend {
        Backend::Postgres => sqlx::migrate!("../../db/migrations/postgres").run(pool).await,
        Backend::Sqlite => sqlx::migrate!("../../db/migrations/sqlite").run(pool).await,
    }
}
