use kernel::model::id::{ReservationId, SlotId, UserId};
use kernel::model::reservation::Reservation;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub slot_id: SlotId,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            user_id,
            slot_id,
            created_at,
        } = value;
        Reservation {
            reservation_id,
            user_id,
            slot_id,
            created_at,
        }
    }
}
