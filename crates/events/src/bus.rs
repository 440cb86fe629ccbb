//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! One [`EventBus`] exists per process: the server creates it at startup
//! and shares it as `Arc<EventBus>`. Subscribers only see events published
//! after they subscribed; there is no replay, so a late consumer must load
//! current state itself. Dropping the last `Arc` closes the channel and
//! every receiver observes `RecvError::Closed`.

use chrono::{DateTime, Utc};
use nemitzam_core::site_config::SiteConfig;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// SiteEvent
// ---------------------------------------------------------------------------

/// An event published on the bus.
///
/// Serialized with a `type` tag so it can be forwarded verbatim to browser
/// clients, e.g. `{"type":"siteConfigUpdated","config":{...},"at":"..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SiteEvent {
    /// The admin saved the site configuration. Carries the full record.
    SiteConfigUpdated {
        config: SiteConfig,
        at: DateTime<Utc>,
    },
}

impl SiteEvent {
    /// A config broadcast stamped with the current time.
    pub fn config_updated(config: SiteConfig) -> Self {
        Self::SiteConfigUpdated {
            config,
            at: Utc::now(),
        }
    }

    /// Dot-separated name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SiteConfigUpdated { .. } => "site_config.updated",
        }
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 64;

/// In-process fan-out event bus.
///
/// # Usage
///
/// ```rust
/// use nemitzam_core::site_config::SiteConfig;
/// use nemitzam_events::bus::{EventBus, SiteEvent};
///
/// let bus = EventBus::default();
/// let _rx = bus.subscribe();
///
/// bus.publish(SiteEvent::config_updated(SiteConfig::default()));
/// ```
pub struct EventBus {
    sender: broadcast::Sender<SiteEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers. Returns how many
    /// subscribers it reached.
    pub fn publish(&self, event: SiteEvent) -> usize {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(event = name, receivers, "Event published");
                receivers
            }
            // Only fails when there are zero receivers.
            Err(_) => {
                tracing::debug!(event = name, "Event published with no subscribers");
                0
            }
        }
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
