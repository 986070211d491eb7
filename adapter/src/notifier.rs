use kernel::notifier::{SlotEvent, SlotEventNotifier};
use tokio::sync::broadcast;

/// In-process fan-out over a bounded broadcast channel. Slow subscribers
/// drop old events instead of back-pressuring the publisher.
pub struct BroadcastNotifier {
    tx: broadcast::Sender<SlotEvent>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }
}

impl SlotEventNotifier for BroadcastNotifier {
    fn publish(&self, event: SlotEvent) {
        // send only errs when nobody is subscribed right now; the state
        // mutation that triggered the event must not care either way.
        if let Err(e) = self.tx.send(event) {
            tracing::debug!(message = %e.0.message, "no subscribers for slot event");
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<SlotEvent> {
        self.tx.subscribe()
    }
}
