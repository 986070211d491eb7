use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::parking::event::{RecordEntry, RecordExit};
use crate::model::parking::{Entry, Exit};

#[async_trait]
pub trait ParkingRepository: Send + Sync {
    /// Records a vehicle entering and marks the slot unavailable. Duplicate
    /// entries for the same plate are permitted (kiosk re-trigger); the exit
    /// matcher resolves to the latest one.
    async fn record_entry(&self, event: RecordEntry) -> AppResult<Entry>;

    /// Matches the most recent entry for the plate, computes the charge and
    /// frees the slot. Fails with `EntityNotFound` when the plate has no
    /// entry on record.
    async fn record_exit(&self, event: RecordExit) -> AppResult<Exit>;

    /// Completed stays for a plate, most recent first.
    async fn find_history_by_plate(&self, plate_number: &str) -> AppResult<Vec<Exit>>;
}
