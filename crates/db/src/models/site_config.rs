//! Key/value rows backing the site configuration record.

use nemitzam_core::site_config::SiteConfig;
use nemitzam_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `site_config` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SiteConfigEntry {
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}

/// Fold rows into the fixed-shape record (unknown keys ignored).
pub fn fold_entries(entries: &[SiteConfigEntry]) -> SiteConfig {
    SiteConfig::from_entries(entries.iter().map(|e| (e.key.as_str(), e.value.as_str())))
}
