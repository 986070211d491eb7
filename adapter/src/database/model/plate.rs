use kernel::model::plate::DetectedPlate;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct DetectedPlateRow {
    pub plate_number: String,
    pub detected_at: DateTime<Utc>,
}

impl From<DetectedPlateRow> for DetectedPlate {
    fn from(value: DetectedPlateRow) -> Self {
        let DetectedPlateRow {
            plate_number,
            detected_at,
        } = value;
        DetectedPlate {
            plate_number,
            timestamp: detected_at,
        }
    }
}
