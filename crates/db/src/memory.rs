//! In-process [`Gateway`] with fault injection.
//!
//! Backs the test suites and the API's local mode (no `DATABASE_URL`).
//! Tables live behind a `std::sync::Mutex`; no guard is held across an
//! `.await`. Every trait call increments a counter so callers can assert
//! that a code path issued no gateway traffic.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use nemitzam_core::drafts::{CategoryDraft, ProjectDraft};
use nemitzam_core::site_config::SiteConfig;
use nemitzam_core::types::DbId;

use crate::gateway::{Gateway, GatewayError, GatewayResult, ListQuery};
use crate::models::category::Category;
use crate::models::project::Project;
use crate::models::site_config::SiteConfigEntry;

#[derive(Default)]
struct Tables {
    projects: Vec<Project>,
    categories: Vec<Category>,
    config: Vec<SiteConfigEntry>,
    next_id: DbId,
}

impl Tables {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
struct Faults {
    config_keys: HashSet<String>,
    next_write: Option<String>,
    reads: Option<String>,
}

/// Gateway keeping all three tables in memory.
#[derive(Default)]
pub struct MemoryGateway {
    tables: Mutex<Tables>,
    faults: Mutex<Faults>,
    calls: AtomicUsize,
}

impl MemoryGateway {
    /// A gateway whose `site_config` table is pre-seeded with every known
    /// key at its default value, as the migrations do.
    pub fn new() -> Self {
        let gateway = Self::default();
        for (key, value) in SiteConfig::default().entries() {
            gateway.seed_config(key, value);
        }
        gateway
    }

    /// A gateway with no rows at all.
    pub fn empty() -> Self {
        Self::default()
    }

    // -- seeding ------------------------------------------------------------

    /// Insert or overwrite a config row directly, bypassing the
    /// update-only gateway contract.
    pub fn seed_config(&self, key: &str, value: &str) {
        let mut tables = self.tables();
        let now = Utc::now();
        if let Some(entry) = tables.config.iter_mut().find(|e| e.key == key) {
            entry.value = value.to_string();
            entry.updated_at = now;
            return;
        }
        tables.config.push(SiteConfigEntry {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: now,
        });
    }

    /// Insert a project row directly.
    pub fn seed_project(&self, draft: &ProjectDraft) -> Project {
        self.tables().insert_project(draft)
    }

    /// Insert a category row directly.
    pub fn seed_category(&self, draft: &CategoryDraft) -> Category {
        self.tables().insert_category(draft)
    }

    // -- fault injection ----------------------------------------------------

    /// Make every update of `key` fail until [`clear_faults`](Self::clear_faults).
    pub fn fail_config_key(&self, key: &str) {
        self.faults().config_keys.insert(key.to_string());
    }

    /// Make the next insert/update/delete fail with `message`.
    pub fn fail_next_write(&self, message: &str) {
        self.faults().next_write = Some(message.to_string());
    }

    /// Make every list query and health check fail with `message`.
    pub fn fail_reads(&self, message: &str) {
        self.faults().reads = Some(message.to_string());
    }

    pub fn clear_faults(&self) {
        *self.faults() = Faults::default();
    }

    // -- inspection ---------------------------------------------------------

    /// Number of gateway calls issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn projects(&self) -> Vec<Project> {
        self.tables().projects.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.tables().categories.clone()
    }

    pub fn config_entries(&self) -> Vec<SiteConfigEntry> {
        self.tables().config.clone()
    }

    /// Stored value of a config key.
    pub fn config_value(&self, key: &str) -> Option<String> {
        self.tables()
            .config
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.clone())
    }

    // -- internals ----------------------------------------------------------

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn faults(&self) -> MutexGuard<'_, Faults> {
        self.faults.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_read(&self) -> GatewayResult<()> {
        self.record_call();
        match &self.faults().reads {
            Some(message) => Err(GatewayError::Rejected(message.clone())),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> GatewayResult<()> {
        self.record_call();
        match self.faults().next_write.take() {
            Some(message) => Err(GatewayError::Rejected(message)),
            None => Ok(()),
        }
    }
}

impl Tables {
    fn insert_project(&mut self, draft: &ProjectDraft) -> Project {
        let now = Utc::now();
        let project = Project {
            id: self.allocate_id(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            image_url: draft.image_url.clone(),
            category: draft.category.clone(),
            order_index: draft.order_index,
            created_at: now,
            updated_at: now,
        };
        self.projects.push(project.clone());
        project
    }

    fn insert_category(&mut self, draft: &CategoryDraft) -> Category {
        let category = Category {
            id: self.allocate_id(),
            name: draft.name.clone(),
            slug: draft.slug.clone(),
            display_order: draft.display_order,
        };
        self.categories.push(category.clone());
        category
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn list_projects(&self, query: ListQuery) -> GatewayResult<Vec<Project>> {
        self.check_read()?;
        let mut rows = self.projects();
        rows.sort_by_key(|p| (p.order_index, p.id));
        if let Some(limit) = query.limit {
            rows.truncate(usize::try_from(limit).unwrap_or(0));
        }
        Ok(rows)
    }

    async fn insert_project(&self, draft: &ProjectDraft) -> GatewayResult<Project> {
        self.check_write()?;
        Ok(self.tables().insert_project(draft))
    }

    async fn update_project(
        &self,
        id: DbId,
        draft: &ProjectDraft,
    ) -> GatewayResult<Option<Project>> {
        self.check_write()?;
        let mut tables = self.tables();
        let Some(project) = tables.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        project.title = draft.title.clone();
        project.description = draft.description.clone();
        project.image_url = draft.image_url.clone();
        project.category = draft.category.clone();
        project.order_index = draft.order_index;
        project.updated_at = Utc::now();
        Ok(Some(project.clone()))
    }

    async fn delete_project(&self, id: DbId) -> GatewayResult<bool> {
        self.check_write()?;
        let mut tables = self.tables();
        let before = tables.projects.len();
        tables.projects.retain(|p| p.id != id);
        Ok(tables.projects.len() < before)
    }

    async fn list_categories(&self) -> GatewayResult<Vec<Category>> {
        self.check_read()?;
        let mut rows = self.categories();
        rows.sort_by_key(|c| (c.display_order, c.id));
        Ok(rows)
    }

    async fn insert_category(&self, draft: &CategoryDraft) -> GatewayResult<Category> {
        self.check_write()?;
        Ok(self.tables().insert_category(draft))
    }

    async fn update_category(
        &self,
        id: DbId,
        draft: &CategoryDraft,
    ) -> GatewayResult<Option<Category>> {
        self.check_write()?;
        let mut tables = self.tables();
        let Some(category) = tables.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        category.name = draft.name.clone();
        category.slug = draft.slug.clone();
        category.display_order = draft.display_order;
        Ok(Some(category.clone()))
    }

    async fn delete_category(&self, id: DbId) -> GatewayResult<bool> {
        self.check_write()?;
        let mut tables = self.tables();
        let before = tables.categories.len();
        tables.categories.retain(|c| c.id != id);
        Ok(tables.categories.len() < before)
    }

    async fn list_site_config(
        &self,
        keys: Option<&[&str]>,
    ) -> GatewayResult<Vec<SiteConfigEntry>> {
        self.check_read()?;
        let rows = self
            .config_entries()
            .into_iter()
            .filter(|e| keys.map_or(true, |keys| keys.contains(&e.key.as_str())))
            .collect();
        Ok(rows)
    }

    async fn update_site_config(&self, key: &str, value: &str) -> GatewayResult<bool> {
        self.check_write()?;
        if self.faults().config_keys.contains(key) {
            return Err(GatewayError::Rejected(format!(
                "update of config key '{key}' rejected"
            )));
        }
        let mut tables = self.tables();
        let Some(entry) = tables.config.iter_mut().find(|e| e.key == key) else {
            return Ok(false);
        };
        entry.value = value.to_string();
        entry.updated_at = Utc::now();
        Ok(true)
    }

    /// Fails while a read fault is injected.
    async fn health_check(&self) -> GatewayResult<()> {
        self.check_read()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
