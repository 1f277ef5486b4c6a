use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
/// Interaction bus for pub/sub messaging
///
/// Input sources publish gestures from any thread; listeners drain their
/// receivers on the thread that owns them.
use std::sync::Arc;

use super::events::InteractionEvent;

/// Subscriber ID for tracking subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

/// Event subscriber
struct Subscriber {
    id: SubscriberId,
    sender: Sender<InteractionEvent>,
}

/// Bus for broadcasting interaction events to subscribers
pub struct InteractionBus {
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
    next_id: Arc<RwLock<usize>>,
}

impl InteractionBus {
    /// Create a new interaction bus
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(0)),
        }
    }

    /// Subscribe to events, returns a receiver and subscription ID
    pub fn subscribe(&self) -> (Receiver<InteractionEvent>, SubscriberId) {
        let (tx, rx) = unbounded();

        let mut next_id = self.next_id.write();
        let id = SubscriberId(*next_id);
        *next_id += 1;
        drop(next_id);

        self.subscribers.write().push(Subscriber { id, sender: tx });

        (rx, id)
    }

    /// Unsubscribe from events
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.write().retain(|s| s.id != id);
    }

    /// Publish an event to all subscribers
    pub fn publish(&self, event: InteractionEvent) {
        let subscribers = self.subscribers.read();

        for subscriber in subscribers.iter() {
            // A dropped receiver just misses the event
            let _ = subscriber.sender.try_send(event);
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl Default for InteractionBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InteractionBus {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_subscribe() {
        let bus = InteractionBus::new();
        let (_rx, _id) = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_bus_unsubscribe() {
        let bus = InteractionBus::new();
        let (_rx, id) = bus.subscribe();
        bus.unsubscribe(id);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_bus_publish_multiple_subscribers() {
        let bus = InteractionBus::new();
        let (rx1, _id1) = bus.subscribe();
        let (rx2, _id2) = bus.subscribe();

        bus.publish(InteractionEvent::TouchStart);

        assert_eq!(rx1.try_recv().unwrap(), InteractionEvent::TouchStart);
        assert_eq!(rx2.try_recv().unwrap(), InteractionEvent::TouchStart);
    }

    #[test]
    fn test_bus_publish_from_other_thread() {
        let bus = InteractionBus::new();
        let (rx, _id) = bus.subscribe();

        let publisher = bus.clone();
        std::thread::spawn(move || publisher.publish(InteractionEvent::PointerDown))
            .join()
            .unwrap();

        assert_eq!(rx.try_recv().unwrap(), InteractionEvent::PointerDown);
    }

    #[test]
    fn test_bus_clone_shares_state() {
        let bus1 = InteractionBus::new();
        let bus2 = bus1.clone();

        let (_rx, _id) = bus1.subscribe();
        assert_eq!(bus2.subscriber_count(), 1);
    }
}
