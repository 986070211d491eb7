pub mod event;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::error::AppError;

use crate::model::id::SlotId;

/// A vehicle entering the facility. Immutable once recorded and kept as
/// history; the exit matcher always resolves a plate to its latest entry.
#[derive(Debug, Clone)]
pub struct Entry {
    pub plate_number: String,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
}

/// A completed stay together with its computed charge.
#[derive(Debug, Clone)]
pub struct Exit {
    pub plate_number: String,
    pub slot_id: SlotId,
    pub entry_time: DateTime<Utc>,
    pub exit_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
        }
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(PaymentStatus::Pending),
            "paid" => Ok(PaymentStatus::Paid),
            other => Err(AppError::ConversionEntityError(format!(
                "unknown payment status: {other}"
            ))),
        }
    }
}

/// Elapsed stay length in whole minutes, rounded up. The ceiling is taken
/// over milliseconds so a stay crossing a minute boundary by any fraction
/// bills the next minute. A near-instant stay still bills as one minute.
pub fn duration_minutes(entry_time: DateTime<Utc>, exit_time: DateTime<Utc>) -> i64 {
    let elapsed_ms = (exit_time - entry_time).num_milliseconds().max(0);
    let minutes = (elapsed_ms + 59_999) / 60_000;
    minutes.max(1)
}

/// Number of 30-minute billing blocks, partial blocks rounded up.
pub fn billed_blocks(duration_minutes: i64) -> i64 {
    (duration_minutes + 29) / 30
}

pub fn total_amount(duration_minutes: i64, rate_per_30_minutes: Decimal) -> Decimal {
    Decimal::from(billed_blocks(duration_minutes)) * rate_per_30_minutes
}
