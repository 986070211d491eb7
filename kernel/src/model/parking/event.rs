use chrono::{DateTime, Utc};
use derive_new::new;
use rust_decimal::Decimal;

use crate::model::id::SlotId;

#[derive(Debug, new)]
pub struct RecordEntry {
    pub plate_number: String,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
}

#[derive(Debug, new)]
pub struct RecordExit {
    pub plate_number: String,
    pub slot_id: SlotId,
    pub exit_time: DateTime<Utc>,
    pub rate_per_30_minutes: Decimal,
}
