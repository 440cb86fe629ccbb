//! Nemitzam in-process event bus.
//!
//! - [`EventBus`]: publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`SiteEvent`]: the typed events carried on the bus.

pub mod bus;

pub use bus::{EventBus, SiteEvent};
