use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::{SlotId, UserId};

#[derive(Debug, new)]
pub struct CreateReservation {
    pub user_id: UserId,
    pub slot_id: SlotId,
    pub created_at: DateTime<Utc>,
}
