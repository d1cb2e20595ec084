//! Repository for the `series` table.

use sj_core::types::DbId;

use crate::models::series::Series;
use crate::{health_check, DbError, DbPool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, image";

/// Provides CRUD operations for series.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series, returning its generated id.
    pub async fn create(pool: &DbPool, title: &str, image: &str) -> Result<DbId, DbError> {
        health_check(pool).await?;
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO series (title, image) VALUES ($1, $2) RETURNING id",
        )
        .bind(title)
        .bind(image)
        .fetch_one(pool)
        .await?;
        tracing::debug!(series_id = id, title, "Series created");
        Ok(id)
    }

    /// Find a series by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Series, DbError> {
        health_check(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("Series", id))
    }

    /// Find a series by its exact title.
    ///
    /// Titles are not unique in the schema; the oldest match wins.
    pub async fn find_by_title(pool: &DbPool, title: &str) -> Result<Series, DbError> {
        health_check(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM series WHERE title = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Series>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("Series", format!("'{title}'")))
    }

    /// Delete a series row. Fails with `NotFound` when no row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), DbError> {
        health_check(pool).await?;
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Series", id));
        }
        Ok(())
    }

    /// Number of series rows whose stored image is `image`.
    pub async fn count_with_image(pool: &DbPool, image: &str) -> Result<i64, DbError> {
        health_check(pool).await?;
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM series WHERE image = $1")
            .bind(image)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
