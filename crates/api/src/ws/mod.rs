//! WebSocket relay of site events.
//!
//! Browser clients connect to `/api/v1/ws`; every event published on the
//! bus is serialized once and pushed to all of them.

mod handler;
mod heartbeat;
pub mod manager;
mod relay;

pub use handler::ws_handler;
pub use heartbeat::run_heartbeat;
pub use manager::WsManager;
pub use relay::run_event_relay;
