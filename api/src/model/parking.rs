use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::id::SlotId;
use kernel::model::parking::Exit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntryRequest {
    #[garde(length(min = 1))]
    pub plate_number: String,
    #[garde(length(min = 1))]
    pub slot_id: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordExitRequest {
    #[garde(length(min = 1))]
    pub plate_number: String,
    #[garde(length(min = 1))]
    pub slot_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub message: String,
    pub plate_number: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitResponse {
    pub message: String,
    pub plate_number: String,
    pub duration_minutes: i64,
    pub total_amount: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitsResponse {
    pub items: Vec<ExitRecordResponse>,
}

impl From<Vec<Exit>> for ExitsResponse {
    fn from(value: Vec<Exit>) -> Self {
        Self {
            items: value.into_iter().map(ExitRecordResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitRecordResponse {
    pub plate_number: String,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub total_amount: Decimal,
    pub payment_status: String,
}

impl From<Exit> for ExitRecordResponse {
    fn from(value: Exit) -> Self {
        let Exit {
            plate_number,
            slot_id,
            entry_time,
            exit_time,
            duration_minutes,
            total_amount,
            payment_status,
        } = value;
        Self {
            plate_number,
            slot_id,
            entry_time,
            exit_time,
            duration_minutes,
            total_amount,
            payment_status: payment_status.as_str().to_string(),
        }
    }
}
