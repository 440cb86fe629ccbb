//! Persistence layer for the studio site.
//!
//! - [`models`]: row types for `projects`, `project_categories` and
//!   `site_config`.
//! - [`repositories`]: zero-sized repositories issuing SQL through `&PgPool`.
//! - [`gateway`]: the [`Gateway`] port consumed by the studio and API.
//! - [`PgGateway`] / [`MemoryGateway`]: PostgreSQL-backed and in-process
//!   implementations of that port.

use sqlx::postgres::PgPoolOptions;

pub mod gateway;
pub mod memory;
pub mod models;
pub mod pg_gateway;
pub mod repositories;

pub use gateway::{Gateway, GatewayError, GatewayResult, ListQuery};
pub use memory::MemoryGateway;
pub use pg_gateway::PgGateway;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
