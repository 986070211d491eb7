use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::plate::DetectedPlate;

/// Append-only OCR audit log.
#[async_trait]
pub trait DetectedPlateRepository: Send + Sync {
    async fn create(&self, plate_number: String) -> AppResult<()>;

    /// Most recent detections first; an empty list is a valid result.
    async fn find_all(&self) -> AppResult<Vec<DetectedPlate>>;
}
