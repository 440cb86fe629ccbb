//! Repository for the `projects` table.

use nemitzam_core::drafts::ProjectDraft;
use nemitzam_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list for projects queries.
const COLUMNS: &str =
    "id, title, description, image_url, category, order_index, created_at, updated_at";

/// Provides CRUD operations for gallery projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List projects by `order_index` ascending, ties by `id`.
    ///
    /// `limit = None` returns every row.
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             ORDER BY order_index ASC, id ASC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProjectDraft) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, image_url, category, order_index) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every editable field and re-stamp `updated_at`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectDraft,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title = $2, \
                description = $3, \
                image_url = $4, \
                category = $5, \
                order_index = $6, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(input.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
