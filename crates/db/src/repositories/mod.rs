//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod project_repo;
pub mod site_config_repo;

pub use category_repo::CategoryRepo;
pub use project_repo::ProjectRepo;
pub use site_config_repo::SiteConfigRepo;
