//! Gallery project model.

use nemitzam_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
///
/// `category` is a soft reference to `project_categories.slug`; nothing
/// enforces that the slug exists.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    /// Display sort key. Not unique.
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
