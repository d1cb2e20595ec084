//! Series entity model.

use serde::{Deserialize, Serialize};
use sj_core::types::DbId;
use sqlx::FromRow;

/// A row from the `series` table.
///
/// `image` holds the stored file name, not the URL it was downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "ID")]
    pub id: DbId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Image")]
    pub image: String,
}
