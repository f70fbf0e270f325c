//! Event emitter
//!
//! Fans events out to every listener over a broadcast channel.

use super::{EventName, GlimeshEvent};
use std::future::Future;
use tokio::sync::broadcast;

/// Broadcasts client events to listeners
#[derive(Debug, Clone)]
pub struct EventEmitter {
    sender: broadcast::Sender<GlimeshEvent>,
}

impl EventEmitter {
    /// Create an emitter that buffers up to `capacity` events per slow listener
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Emit an event, returning how many listeners received it
    pub fn emit(&self, event: GlimeshEvent) -> usize {
        tracing::trace!(event = %event, "Emitting event");
        // No listeners is not an error
        self.sender.send(event).unwrap_or(0)
    }

    /// Listen to every event emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<GlimeshEvent> {
        self.sender.subscribe()
    }

    /// Resolve with the next event of the given name
    ///
    /// The listener is registered before this returns, so an event emitted
    /// right after the call is not missed. Resolves to `None` if the emitter
    /// is dropped first.
    pub fn once(&self, name: EventName) -> impl Future<Output = Option<GlimeshEvent>> + Send + 'static {
        let mut receiver = self.subscribe();
        async move {
            loop {
                match receiver.recv().await {
                    Ok(event) if event.name == name => return Some(event),
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(lagged = n, event = %name, "Listener lagged behind");
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        }
    }

    /// Number of active listeners
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new(256)
    }
}
