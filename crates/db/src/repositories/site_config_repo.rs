//! Repository for the `site_config` key/value table.
//!
//! Rows are seeded by migration; this repository only reads and updates
//! them. There is no insert or delete path.

use sqlx::PgPool;

use crate::models::site_config::SiteConfigEntry;

/// Column list for site_config queries.
const COLUMNS: &str = "key, value, updated_at";

pub struct SiteConfigRepo;

impl SiteConfigRepo {
    /// Every row, in key order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteConfigEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_config ORDER BY key ASC");
        sqlx::query_as::<_, SiteConfigEntry>(&query)
            .fetch_all(pool)
            .await
    }

    /// Rows whose key is in `keys`.
    pub async fn list_keys(
        pool: &PgPool,
        keys: &[&str],
    ) -> Result<Vec<SiteConfigEntry>, sqlx::Error> {
        let keys: Vec<String> = keys.iter().map(|k| (*k).to_string()).collect();
        let query = format!("SELECT {COLUMNS} FROM site_config WHERE key = ANY($1) ORDER BY key ASC");
        sqlx::query_as::<_, SiteConfigEntry>(&query)
            .bind(keys)
            .fetch_all(pool)
            .await
    }

    /// Set the value of an existing key and re-stamp `updated_at`.
    /// Returns `false` if no row has that key.
    pub async fn update(pool: &PgPool, key: &str, value: &str) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE site_config SET value = $2, updated_at = NOW() WHERE key = $1")
                .bind(key)
                .bind(value)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
