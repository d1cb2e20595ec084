//! Per-user progress marker for a series.

use serde::{Deserialize, Serialize};
use sj_core::types::DbId;
use sqlx::FromRow;

/// A row from the `last_watched` table, keyed by `(user_id, series_id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct LastWatched {
    #[serde(rename = "UserID")]
    pub user_id: DbId,
    #[serde(rename = "SeriesID")]
    pub series_id: DbId,
    #[serde(rename = "Session")]
    pub last_session: i64,
    #[serde(rename = "Episode")]
    pub last_episode: i64,
}
