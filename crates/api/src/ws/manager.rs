use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use nemitzam_core::types::Timestamp;
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

struct WsConnection {
    sender: WsSender,
    connected_at: Timestamp,
}

/// Registry of open WebSocket connections.
///
/// Wrapped in `Arc` and shared through `AppState`.
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a connection and return the receiver its sink drains.
    pub async fn add(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = WsConnection {
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    pub async fn remove(&self, conn_id: &str) {
        if let Some(conn) = self.connections.write().await.remove(conn_id) {
            let open_for = chrono::Utc::now() - conn.connected_at;
            tracing::debug!(conn_id, secs = open_for.num_seconds(), "Connection removed");
        }
    }

    /// Send `message` to every connection. Returns how many accepted it;
    /// closed channels are skipped and cleaned up by their own handler.
    pub async fn broadcast(&self, message: Message) -> usize {
        let conns = self.connections.read().await;
        conns
            .values()
            .filter(|conn| conn.sender.send(message.clone()).is_ok())
            .count()
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the map.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every connection. Returns how many accepted it.
    pub async fn ping_all(&self) -> usize {
        self.broadcast(Message::Ping(Bytes::new())).await
    }

    /// Drop connections whose receiving half is gone. Returns how many.
    pub async fn prune_closed(&self) -> usize {
        let mut conns = self.connections.write().await;
        let before = conns.len();
        conns.retain(|_, conn| !conn.sender.is_closed());
        before - conns.len()
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn broadcast_reaches_every_connection() {
        let manager = WsManager::new();
        let mut a = manager.add("a".into()).await;
        let mut b = manager.add("b".into()).await;

        let sent = manager.broadcast(Message::Text("hola".into())).await;
        assert_eq!(sent, 2);
        assert!(matches!(a.recv().await, Some(Message::Text(_))));
        assert!(matches!(b.recv().await, Some(Message::Text(_))));
    }

    #[tokio::test]
    async fn dropped_receivers_are_skipped() {
        let manager = WsManager::new();
        let rx = manager.add("gone".into()).await;
        drop(rx);
        assert_eq!(manager.broadcast(Message::Text("x".into())).await, 0);

        assert_eq!(manager.prune_closed().await, 1);
        assert_eq!(manager.connection_count().await, 0);
    }
}
