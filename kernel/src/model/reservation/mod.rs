pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{ReservationId, SlotId, UserId};

/// An advance hold on a slot. A live reservation implies its slot is
/// marked unavailable; cancelling it flips the slot back.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub slot_id: SlotId,
    pub created_at: DateTime<Utc>,
}
