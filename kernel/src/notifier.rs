use serde::Serialize;
use tokio::sync::broadcast;

use crate::model::id::SlotId;

/// One human-readable message per slot-state transition, fanned out to all
/// currently connected subscribers. There is no replay for late joiners.
#[derive(Debug, Clone, Serialize)]
pub struct SlotEvent {
    pub message: String,
}

impl SlotEvent {
    pub fn reserved(slot_id: &SlotId) -> Self {
        Self {
            message: format!("slot {slot_id} reserved"),
        }
    }

    pub fn reservation_cancelled(slot_id: &SlotId) -> Self {
        Self {
            message: format!("reservation for slot {slot_id} cancelled"),
        }
    }

    pub fn occupied(slot_id: &SlotId) -> Self {
        Self {
            message: format!("slot {slot_id} occupied"),
        }
    }

    pub fn released(slot_id: &SlotId) -> Self {
        Self {
            message: format!("slot {slot_id} now available"),
        }
    }

    pub fn availability_changed(slot_id: &SlotId, is_available: bool) -> Self {
        let state = if is_available {
            "available"
        } else {
            "unavailable"
        };
        Self {
            message: format!("slot {slot_id} marked {state}"),
        }
    }
}

/// Publish side must never block and never fail the state mutation that
/// triggered it; delivery is best-effort, at-least-once.
pub trait SlotEventNotifier: Send + Sync {
    fn publish(&self, event: SlotEvent);

    fn subscribe(&self) -> broadcast::Receiver<SlotEvent>;
}
