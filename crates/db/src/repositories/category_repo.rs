//! Repository for the `project_categories` table.

use nemitzam_core::drafts::CategoryDraft;
use nemitzam_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for project_categories queries.
const COLUMNS: &str = "id, name, slug, display_order";

/// Provides CRUD operations for project categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List categories by `display_order` ascending, ties by `id`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_categories ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Create a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CategoryDraft) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_categories (name, slug, display_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Update a category by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryDraft,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE project_categories SET
                name = $2,
                slug = $3,
                display_order = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
