//! Repository for the `series_list` join table (user subscriptions).

use sj_core::types::DbId;

use crate::models::series::Series;
use crate::{health_check, DbError, DbPool};

pub struct SeriesListRepo;

impl SeriesListRepo {
    /// Subscribe a user to a series.
    ///
    /// Memberships are unique per `(user_id, series_id)`; appending an existing
    /// membership is a no-op.
    pub async fn append(pool: &DbPool, user_id: DbId, series_id: DbId) -> Result<(), DbError> {
        health_check(pool).await?;
        sqlx::query(
            "INSERT INTO series_list (user_id, series_id) VALUES ($1, $2)
             ON CONFLICT (user_id, series_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(series_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a membership, returning the number of rows deleted.
    pub async fn remove(pool: &DbPool, user_id: DbId, series_id: DbId) -> Result<u64, DbError> {
        health_check(pool).await?;
        let result = sqlx::query("DELETE FROM series_list WHERE user_id = $1 AND series_id = $2")
            .bind(user_id)
            .bind(series_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Series a user is subscribed to, in the order they were added.
    pub async fn list_for_user(pool: &DbPool, user_id: DbId) -> Result<Vec<Series>, DbError> {
        health_check(pool).await?;
        let rows = sqlx::query_as::<_, Series>(
            "SELECT s.id, s.title, s.image
             FROM series s
             JOIN series_list l ON l.series_id = s.id
             WHERE l.user_id = $1
             ORDER BY l.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
