//! Shell lifecycle notifications.
//!
//! ## Learning: Broadcast Channels
//!
//! Events are values on a `tokio::sync::broadcast` channel:
//! - The shell never holds references to its observers
//! - Every receiver gets its own clone of each event
//! - A receiver that falls behind sees `Lagged` instead of blocking the sender
//! - Only events sent after `subscribe()` are delivered

use tokio::sync::broadcast;

use crate::page::{InstanceId, PageId};

/// Something the shell did.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    /// Startup finished with this theme
    Started { theme: String },

    /// A page was constructed and attached
    PageMounted { page: PageId, instance: InstanceId },
    /// A page was destroyed and detached
    PageDestroyed { page: PageId, instance: InstanceId },

    /// `show_page` got a token that is not registered
    UnknownPage(String),
    /// Building or attaching a page failed
    PageFailed { page: PageId, error: String },

    /// The user asked for a restart
    ReloadRequested,
    /// The shell is stopping the event loop
    ShuttingDown,
}

/// Event bus for broadcasting shell events.
///
/// ## Design
///
/// Cloning the bus clones the sender, so a caller can keep a handle and
/// subscribe before handing the bus to [`Shell::initialize`](crate::Shell::initialize).
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        // Capacity of 64 events in the buffer
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: ShellEvent) {
        // No receivers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribes to events emitted from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains everything currently queued on a receiver.
pub fn drain(receiver: &mut broadcast::Receiver<ShellEvent>) -> Vec<ShellEvent> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                tracing::warn!("Event receiver lagged, missed {} events", n);
            }
            Err(_) => break,
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(ShellEvent::ReloadRequested);

        let event = rx.recv().await.unwrap();
        assert_eq!(event, ShellEvent::ReloadRequested);
    }

    #[test]
    fn test_emit_without_subscribers() {
        let bus = EventBus::new();
        bus.emit(ShellEvent::ShuttingDown);

        let mut rx = bus.subscribe();
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_drain_preserves_order() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(ShellEvent::UnknownPage("a".into()));
        bus.emit(ShellEvent::UnknownPage("b".into()));

        assert_eq!(
            drain(&mut rx),
            vec![
                ShellEvent::UnknownPage("a".into()),
                ShellEvent::UnknownPage("b".into()),
            ]
        );
    }
}
