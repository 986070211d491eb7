use kernel::model::id::SlotId;
use kernel::model::parking::{Entry, Exit, PaymentStatus};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct EntryRow {
    pub plate_number: String,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
}

impl From<EntryRow> for Entry {
    fn from(value: EntryRow) -> Self {
        let EntryRow {
            plate_number,
            slot_id,
            entry_time,
        } = value;
        Entry {
            plate_number,
            slot_id,
            entry_time,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct ExitRow {
    pub plate_number: String,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub total_amount: Decimal,
    pub payment_status: String,
}

impl TryFrom<ExitRow> for Exit {
    type Error = AppError;

    fn try_from(value: ExitRow) -> Result<Self, Self::Error> {
        let ExitRow {
            plate_number,
            slot_id,
            entry_time,
            exit_time,
            duration_minutes,
            total_amount,
            payment_status,
        } = value;
        Ok(Exit {
            plate_number,
            slot_id,
            entry_time,
            exit_time,
            duration_minutes,
            total_amount,
            payment_status: PaymentStatus::try_from(payment_status.as_str())?,
        })
    }
}
