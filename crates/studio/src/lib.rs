//! Content-management micro-core for the studio site.
//!
//! - [`config_store`]: loads, saves and broadcasts the site configuration.
//! - [`controller`]: the shared create/edit/delete workflow for projects
//!   and categories.
//! - [`panel`]: the password-gated admin panel bundling the above.
//! - [`display`]: header, footer, gallery and hero projections, mounted
//!   as cancellable tasks.
//! - [`prompt`]: the notice/confirmation port between the workflow and
//!   the person operating it.

pub mod config_store;
pub mod controller;
pub mod display;
pub mod entity;
pub mod error;
pub mod panel;
pub mod prompt;

pub use config_store::ConfigStore;
pub use controller::{ContentController, DeleteOutcome, SaveOutcome};
pub use error::{ConfigSaveError, StudioError, StudioResult};
pub use panel::{AdminPanel, Tab};
pub use prompt::{Notice, NoticeLevel, Prompt, TracingPrompt};
