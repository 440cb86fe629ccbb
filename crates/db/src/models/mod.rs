//! Row types for the three site tables.

pub mod category;
pub mod project;
pub mod site_config;
