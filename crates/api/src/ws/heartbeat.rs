use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::ws::manager::WsManager;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Ping every display client on a fixed interval and drop connections
/// whose socket task has already gone. Runs until `cancel` fires.
pub async fn run_heartbeat(ws_manager: Arc<WsManager>, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(HEARTBEAT_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                let pinged = ws_manager.ping_all().await;
                let pruned = ws_manager.prune_closed().await;
                tracing::debug!(pinged, pruned, "WebSocket heartbeat");
            }
        }
    }
    tracing::info!("Heartbeat stopped");
}

#[cfg(test)]
mod tests {
    use axum::extract::ws::Message;

    use super::*;

    #[tokio::test]
    async fn heartbeat_pings_and_prunes() {
        let manager = Arc::new(WsManager::new());
        let mut alive = manager.add("alive".into()).await;
        drop(manager.add("gone".into()).await);

        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_heartbeat(Arc::clone(&manager), cancel.clone()));

        // The first tick fires immediately.
        assert!(matches!(alive.recv().await, Some(Message::Ping(_))));

        cancel.cancel();
        task.await.unwrap();
        assert_eq!(manager.connection_count().await, 1);
    }
}
