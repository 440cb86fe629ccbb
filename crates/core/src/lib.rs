//! Nemitzam domain core.
//!
//! Pure, I/O-free building blocks shared by the gateway, studio and API
//! crates: identifiers, the domain error type, the site-configuration
//! record, content drafts and their presence validation, the editor state
//! machine, the admin session gate, and the display projections used by
//! the public site (gallery filter, hero rotator, header/footer branding).

pub mod branding;
pub mod drafts;
pub mod editor;
pub mod error;
pub mod gallery;
pub mod rotator;
pub mod session;
pub mod shell;
pub mod site_config;
pub mod types;
