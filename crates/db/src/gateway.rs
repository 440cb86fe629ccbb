//! The data gateway port.
//!
//! Every component that reads or writes site content goes through a
//! [`Gateway`]. Schema, constraints, ordering and filtering belong to the
//! backing store; the port only exposes the typed operations the site
//! needs over its three tables.

use async_trait::async_trait;
use nemitzam_core::drafts::{CategoryDraft, ProjectDraft};
use nemitzam_core::types::DbId;

use crate::models::category::Category;
use crate::models::project::Project;
use crate::models::site_config::SiteConfigEntry;

/// Errors raised by a gateway call.
///
/// User-facing code does not branch on the variant: a network failure and
/// a constraint violation are reported the same way.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The database rejected or failed the query.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store refused the request (missing row, injected fault).
    #[error("Request rejected: {0}")]
    Rejected(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Row limit for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: Option<i64>,
}

impl ListQuery {
    /// No limit.
    pub fn all() -> Self {
        Self { limit: None }
    }

    /// At most `limit` rows.
    pub fn first(limit: i64) -> Self {
        Self { limit: Some(limit) }
    }
}

/// Capability interface over the `projects`, `project_categories` and
/// `site_config` tables.
///
/// Lists are ordered by their display key ascending with ties broken by
/// `id` ascending.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list_projects(&self, query: ListQuery) -> GatewayResult<Vec<Project>>;

    async fn insert_project(&self, draft: &ProjectDraft) -> GatewayResult<Project>;

    /// `Ok(None)` when no row has `id`.
    async fn update_project(&self, id: DbId, draft: &ProjectDraft)
        -> GatewayResult<Option<Project>>;

    /// `Ok(false)` when no row has `id`.
    async fn delete_project(&self, id: DbId) -> GatewayResult<bool>;

    async fn list_categories(&self) -> GatewayResult<Vec<Category>>;

    async fn insert_category(&self, draft: &CategoryDraft) -> GatewayResult<Category>;

    async fn update_category(
        &self,
        id: DbId,
        draft: &CategoryDraft,
    ) -> GatewayResult<Option<Category>>;

    async fn delete_category(&self, id: DbId) -> GatewayResult<bool>;

    /// All config rows, or only those whose key is in `keys`.
    async fn list_site_config(&self, keys: Option<&[&str]>)
        -> GatewayResult<Vec<SiteConfigEntry>>;

    /// Update-by-key. `Ok(false)` when the key has no row; never inserts.
    async fn update_site_config(&self, key: &str, value: &str) -> GatewayResult<bool>;

    async fn health_check(&self) -> GatewayResult<()>;
}
