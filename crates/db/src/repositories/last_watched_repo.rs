//! Repository for the `last_watched` table.

use sj_core::types::DbId;

use crate::models::last_watched::LastWatched;
use crate::{health_check, DbError, DbPool};

const COLUMNS: &str = "user_id, series_id, last_session, last_episode";

pub struct LastWatchedRepo;

impl LastWatchedRepo {
    /// Record the latest watched `(session, episode)` for a user and series.
    ///
    /// An existing row for the same `(user_id, series_id)` is overwritten
    /// entirely; the stored row is returned.
    pub async fn upsert(
        pool: &DbPool,
        user_id: DbId,
        series_id: DbId,
        session: i64,
        episode: i64,
    ) -> Result<LastWatched, DbError> {
        health_check(pool).await?;
        let query = format!(
            "INSERT INTO last_watched (user_id, series_id, last_session, last_episode)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, series_id) DO UPDATE SET
                last_session = excluded.last_session,
                last_episode = excluded.last_episode
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, LastWatched>(&query)
            .bind(user_id)
            .bind(series_id)
            .bind(session)
            .bind(episode)
            .fetch_one(pool)
            .await?;
        tracing::debug!(user_id, series_id, session, episode, "Last watched updated");
        Ok(row)
    }

    /// All progress markers of a user, ordered by series id.
    pub async fn list_for_user(pool: &DbPool, user_id: DbId) -> Result<Vec<LastWatched>, DbError> {
        health_check(pool).await?;
        let query =
            format!("SELECT {COLUMNS} FROM last_watched WHERE user_id = $1 ORDER BY series_id");
        let rows = sqlx::query_as::<_, LastWatched>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
