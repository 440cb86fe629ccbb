use std::sync::Arc;

use axum::extract::ws::Message;
use nemitzam_events::SiteEvent;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::ws::manager::WsManager;

/// Forward bus events to every WebSocket client as JSON text frames.
///
/// Runs until `cancel` fires or the bus is dropped.
pub async fn run_event_relay(
    ws_manager: Arc<WsManager>,
    mut events: broadcast::Receiver<SiteEvent>,
    cancel: CancellationToken,
) {
    loop {
        let event = tokio::select! {
            () = cancel.cancelled() => break,
            event = events.recv() => event,
        };

        match event {
            Ok(event) => {
                let payload = match serde_json::to_string(&event) {
                    Ok(payload) => payload,
                    Err(err) => {
                        tracing::error!(event = event.name(), error = %err, "Failed to serialize event");
                        continue;
                    }
                };
                let sent = ws_manager.broadcast(Message::Text(payload.into())).await;
                tracing::debug!(event = event.name(), sent, "Event relayed to WebSocket clients");
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Event relay lagged behind the bus");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
    tracing::info!("Event relay stopped");
}

#[cfg(test)]
mod tests {
    use nemitzam_core::site_config::SiteConfig;
    use nemitzam_events::EventBus;

    use super::*;

    #[tokio::test]
    async fn config_updates_reach_clients_as_json() {
        let bus = EventBus::default();
        let manager = Arc::new(WsManager::new());
        let mut client = manager.add("c1".into()).await;
        let cancel = CancellationToken::new();
        let relay = tokio::spawn(run_event_relay(
            Arc::clone(&manager),
            bus.subscribe(),
            cancel.clone(),
        ));

        bus.publish(SiteEvent::config_updated(SiteConfig {
            site_name: "Nemitzam".into(),
            ..SiteConfig::default()
        }));

        let Some(Message::Text(text)) = client.recv().await else {
            panic!("expected a text frame");
        };
        let json: serde_json::Value = serde_json::from_str(text.as_str()).unwrap();
        assert_eq!(json["type"], "siteConfigUpdated");
        assert_eq!(json["config"]["site_name"], "Nemitzam");

        cancel.cancel();
        relay.await.unwrap();
    }
}
