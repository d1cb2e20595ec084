//! Repository for the `episode_resources` table.

use sj_core::types::DbId;

use crate::models::episode_resource::EpisodeResource;
use crate::{health_check, DbError, DbPool};

const COLUMNS: &str = "id, series_id, name, url";

pub struct EpisodeResourceRepo;

impl EpisodeResourceRepo {
    /// Attach a resource to a series, returning its generated id.
    pub async fn create(
        pool: &DbPool,
        series_id: DbId,
        name: &str,
        url: &str,
    ) -> Result<DbId, DbError> {
        health_check(pool).await?;
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO episode_resources (series_id, name, url) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(series_id)
        .bind(name)
        .bind(url)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<EpisodeResource, DbError> {
        health_check(pool).await?;
        let query = format!("SELECT {COLUMNS} FROM episode_resources WHERE id = $1");
        sqlx::query_as::<_, EpisodeResource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("EpisodeResource", id))
    }

    /// All resources of a series in creation order.
    pub async fn list_by_series(
        pool: &DbPool,
        series_id: DbId,
    ) -> Result<Vec<EpisodeResource>, DbError> {
        health_check(pool).await?;
        let query =
            format!("SELECT {COLUMNS} FROM episode_resources WHERE series_id = $1 ORDER BY id");
        let rows = sqlx::query_as::<_, EpisodeResource>(&query)
            .bind(series_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
