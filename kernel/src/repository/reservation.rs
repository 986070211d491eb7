use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::{ReservationId, SlotId, UserId};
use crate::model::reservation::{event::CreateReservation, Reservation};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Creates a reservation and flips the slot to unavailable as one
    /// atomic operation. Concurrent attempts against the same slot must
    /// yield exactly one success; the losers fail with `SlotUnavailable`.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;

    /// Deletes the reservation and flips its slot back to available.
    /// Returns the freed slot id. A reservation that was already cancelled
    /// fails with `EntityNotFound` and must not touch the slot again.
    async fn delete(&self, reservation_id: ReservationId) -> AppResult<SlotId>;

    /// All reservations held by a user; an empty list is a valid result.
    async fn find_by_user_id(&self, user_id: &UserId) -> AppResult<Vec<Reservation>>;
}
