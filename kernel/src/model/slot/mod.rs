pub mod event;

use crate::model::id::SlotId;

#[derive(Debug, Clone)]
pub struct Slot {
    pub slot_id: SlotId,
    pub level: String,
    pub is_available: bool,
}

/// Outcome of an availability write. `Unchanged` means the slot already
/// carried the requested value, so no broadcast should be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityUpdate {
    Changed,
    Unchanged,
}
