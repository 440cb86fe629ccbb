use std::sync::Arc;

use nemitzam_db::Gateway;
use nemitzam_events::EventBus;
use nemitzam_studio::ConfigStore;

use crate::config::ServerConfig;
use crate::sessions::AdminSessions;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Data gateway (PostgreSQL or in-memory).
    pub gateway: Arc<dyn Gateway>,
    pub config: Arc<ServerConfig>,
    /// Site config load/save/broadcast.
    pub config_store: Arc<ConfigStore>,
    /// Process-wide event bus; the config store publishes on it.
    pub event_bus: Arc<EventBus>,
    pub sessions: Arc<AdminSessions>,
    /// WebSocket connections receiving config broadcasts.
    pub ws_manager: Arc<WsManager>,
}

impl AppState {
    /// Wire the state around `gateway`.
    pub fn new(gateway: Arc<dyn Gateway>, config: ServerConfig) -> Self {
        let event_bus = Arc::new(EventBus::default());
        let config_store = Arc::new(ConfigStore::new(
            Arc::clone(&gateway),
            Arc::clone(&event_bus),
        ));
        let sessions = Arc::new(AdminSessions::new(config.admin_password.clone()));
        Self {
            gateway,
            config: Arc::new(config),
            config_store,
            event_bus,
            sessions,
            ws_manager: Arc::new(WsManager::new()),
        }
    }
}
