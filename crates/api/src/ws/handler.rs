use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use nemitzam_core::site_config::SiteConfig;
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

/// First frame on every connection: the config as it is now, so the
/// client does not wait for the next save to render.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename = "siteConfigSnapshot")]
struct Snapshot {
    config: SiteConfig,
}

/// GET /api/v1/ws
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| follow_site(socket, state))
}

async fn follow_site(socket: WebSocket, state: AppState) {
    let conn_id = Uuid::new_v4().to_string();
    let (mut sink, mut inbound) = socket.split();

    // Register before reading so a save racing the snapshot still reaches
    // this client as a broadcast.
    let mut outbound = state.ws_manager.add(conn_id.clone()).await;
    tracing::info!(conn_id = %conn_id, "Display client connected");

    if let Some(frame) = snapshot_frame(&state).await {
        if sink.send(frame).await.is_err() {
            state.ws_manager.remove(&conn_id).await;
            return;
        }
    }

    let forward = tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            if sink.send(frame).await.is_err() {
                break;
            }
        }
    });

    // Display clients only listen. Anything but Close is dropped.
    while let Some(frame) = inbound.next().await {
        match frame {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(conn_id = %conn_id, error = %err, "WebSocket receive error");
                break;
            }
        }
    }

    state.ws_manager.remove(&conn_id).await;
    forward.abort();
    tracing::info!(conn_id = %conn_id, "Display client disconnected");
}

/// The snapshot frame, or `None` when the config cannot be read. The
/// client then starts from its own defaults and waits for broadcasts.
async fn snapshot_frame(state: &AppState) -> Option<Message> {
    let config = match state.config_store.fetch(None).await {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "Skipping config snapshot");
            return None;
        }
    };
    match serde_json::to_string(&Snapshot { config }) {
        Ok(text) => Some(Message::Text(text.into())),
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize config snapshot");
            None
        }
    }
}
