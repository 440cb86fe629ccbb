pub mod categories;
pub mod gallery;
pub mod projects;
pub mod session;
pub mod site_config;
