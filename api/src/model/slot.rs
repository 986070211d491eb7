use kernel::model::id::SlotId;
use kernel::model::slot::Slot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotsResponse {
    pub items: Vec<SlotResponse>,
}

impl From<Vec<Slot>> for SlotsResponse {
    fn from(value: Vec<Slot>) -> Self {
        Self {
            items: value.into_iter().map(SlotResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub slot_id: SlotId,
    pub level: String,
    pub is_available: bool,
}

impl From<Slot> for SlotResponse {
    fn from(value: Slot) -> Self {
        let Slot {
            slot_id,
            level,
            is_available,
        } = value;
        Self {
            slot_id,
            level,
            is_available,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub is_available: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
