//! Episode resource model: a named external link attached to a series.

use serde::{Deserialize, Serialize};
use sj_core::types::DbId;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct EpisodeResource {
    #[serde(rename = "ID")]
    pub id: DbId,
    #[serde(rename = "SeriesID")]
    pub series_id: DbId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "URL")]
    pub url: String,
}
