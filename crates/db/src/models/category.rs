//! Category entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: DbId,
    /// Display label, e.g. "Science". Stored and serialized as `type`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}
