use derive_new::new;

use crate::model::id::SlotId;

#[derive(Debug, new)]
pub struct CreateSlot {
    pub slot_id: SlotId,
    pub level: String,
    pub is_available: bool,
}

#[derive(Debug, new)]
pub struct UpdateAvailability {
    pub slot_id: SlotId,
    pub is_available: bool,
}
