//! Site configuration load, save and broadcast.
//!
//! The store owns the admin-side copy of [`SiteConfig`]. Display mounts do
//! their own reads through [`ConfigStore::fetch`] and then follow the
//! broadcast stream; a save never writes to them directly.

use std::sync::{Arc, RwLock};

use nemitzam_core::site_config::SiteConfig;
use nemitzam_db::models::site_config::fold_entries;
use nemitzam_db::{Gateway, GatewayError, GatewayResult};
use nemitzam_events::{EventBus, SiteEvent};
use tokio::sync::broadcast;

use crate::error::ConfigSaveError;

pub struct ConfigStore {
    gateway: Arc<dyn Gateway>,
    bus: Arc<EventBus>,
    current: RwLock<SiteConfig>,
}

impl ConfigStore {
    pub fn new(gateway: Arc<dyn Gateway>, bus: Arc<EventBus>) -> Self {
        Self {
            gateway,
            bus,
            current: RwLock::new(SiteConfig::default()),
        }
    }

    /// Read the config rows (all of them, or only `keys`) and fold them
    /// onto the defaults. Does not touch the store's own copy.
    pub async fn fetch(&self, keys: Option<&[&str]>) -> GatewayResult<SiteConfig> {
        match self.gateway.list_site_config(keys).await {
            Ok(rows) => Ok(fold_entries(&rows)),
            Err(err) => {
                tracing::error!(error = %err, "Failed to load site config");
                Err(err)
            }
        }
    }

    /// Full-table read that replaces the in-memory record. On failure the
    /// previous record is kept.
    pub async fn load(&self) -> GatewayResult<SiteConfig> {
        let config = self.fetch(None).await?;
        *self.write_current() = config.clone();
        Ok(config)
    }

    /// Write every key of `record`, one update per key in
    /// [`SiteConfig::KEYS`] order, then broadcast the record.
    ///
    /// Stops at the first failing key. Earlier keys stay written and are
    /// reported in [`ConfigSaveError::applied`]; nothing is broadcast. An
    /// update that matched no row counts as a failure.
    pub async fn save(&self, record: &SiteConfig) -> Result<(), ConfigSaveError> {
        let mut applied = Vec::with_capacity(SiteConfig::KEYS.len());

        for (key, value) in record.entries() {
            let result = match self.gateway.update_site_config(key, value).await {
                Ok(true) => Ok(()),
                Ok(false) => Err(GatewayError::Rejected(format!(
                    "no row for config key '{key}'"
                ))),
                Err(err) => Err(err),
            };

            if let Err(source) = result {
                tracing::error!(
                    key,
                    applied = applied.len(),
                    error = %source,
                    "Site config save stopped",
                );
                return Err(ConfigSaveError {
                    applied,
                    failed_key: key,
                    source,
                });
            }
            applied.push(key);
        }

        tracing::info!(site_name = %record.site_name, "Site config saved");
        *self.write_current() = record.clone();
        self.broadcast(record.clone());
        Ok(())
    }

    /// Announce `record` to every current subscriber. Returns how many
    /// were reached.
    pub fn broadcast(&self, record: SiteConfig) -> usize {
        self.bus.publish(SiteEvent::config_updated(record))
    }

    /// Follow future broadcasts.
    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.bus.subscribe()
    }

    /// Snapshot of the in-memory record.
    pub fn current(&self) -> SiteConfig {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn gateway(&self) -> &Arc<dyn Gateway> {
        &self.gateway
    }

    fn write_current(&self) -> std::sync::RwLockWriteGuard<'_, SiteConfig> {
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
