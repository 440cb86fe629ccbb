//! PostgreSQL implementation of [`Gateway`].

use async_trait::async_trait;
use nemitzam_core::drafts::{CategoryDraft, ProjectDraft};
use nemitzam_core::types::DbId;

use crate::gateway::{Gateway, GatewayResult, ListQuery};
use crate::models::category::Category;
use crate::models::project::Project;
use crate::models::site_config::SiteConfigEntry;
use crate::repositories::{CategoryRepo, ProjectRepo, SiteConfigRepo};
use crate::DbPool;

/// Gateway delegating to the sqlx repositories.
#[derive(Clone)]
pub struct PgGateway {
    pool: DbPool,
}

impl PgGateway {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl Gateway for PgGateway {
    async fn list_projects(&self, query: ListQuery) -> GatewayResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool, query.limit).await?)
    }

    async fn insert_project(&self, draft: &ProjectDraft) -> GatewayResult<Project> {
        Ok(ProjectRepo::create(&self.pool, draft).await?)
    }

    async fn update_project(
        &self,
        id: DbId,
        draft: &ProjectDraft,
    ) -> GatewayResult<Option<Project>> {
        Ok(ProjectRepo::update(&self.pool, id, draft).await?)
    }

    async fn delete_project(&self, id: DbId) -> GatewayResult<bool> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }

    async fn list_categories(&self) -> GatewayResult<Vec<Category>> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn insert_category(&self, draft: &CategoryDraft) -> GatewayResult<Category> {
        Ok(CategoryRepo::create(&self.pool, draft).await?)
    }

    async fn update_category(
        &self,
        id: DbId,
        draft: &CategoryDraft,
    ) -> GatewayResult<Option<Category>> {
        Ok(CategoryRepo::update(&self.pool, id, draft).await?)
    }

    async fn delete_category(&self, id: DbId) -> GatewayResult<bool> {
        Ok(CategoryRepo::delete(&self.pool, id).await?)
    }

    async fn list_site_config(
        &self,
        keys: Option<&[&str]>,
    ) -> GatewayResult<Vec<SiteConfigEntry>> {
        let rows = match keys {
            Some(keys) => SiteConfigRepo::list_keys(&self.pool, keys).await?,
            None => SiteConfigRepo::list(&self.pool).await?,
        };
        Ok(rows)
    }

    async fn update_site_config(&self, key: &str, value: &str) -> GatewayResult<bool> {
        Ok(SiteConfigRepo::update(&self.pool, key, value).await?)
    }

    async fn health_check(&self) -> GatewayResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
