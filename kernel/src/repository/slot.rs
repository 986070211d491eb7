use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::slot::event::{CreateSlot, UpdateAvailability};
use crate::model::slot::{AvailabilityUpdate, Slot};

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Used only by the facility seeding tool; slots are never created
    /// through the API at runtime.
    async fn create(&self, event: CreateSlot) -> AppResult<()>;

    async fn find_all(&self) -> AppResult<Vec<Slot>>;

    /// Writes the availability flag only when it differs from the stored
    /// value. Fails with `EntityNotFound` when the slot does not exist.
    async fn set_availability(&self, event: UpdateAvailability)
        -> AppResult<AvailabilityUpdate>;
}
