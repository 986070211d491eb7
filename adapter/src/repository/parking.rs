use async_trait::async_trait;
use derive_new::new;
use kernel::model::parking::event::{RecordEntry, RecordExit};
use kernel::model::parking::{self, Entry, Exit, PaymentStatus};
use kernel::repository::parking::ParkingRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::parking::{EntryRow, ExitRow};
use crate::database::ConnectionPool;

#[derive(new)]
pub struct ParkingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ParkingRepository for ParkingRepositoryImpl {
    async fn record_entry(&self, event: RecordEntry) -> AppResult<Entry> {
        let mut tx = self.db.begin().await?;

        // Entry flips the slot regardless of its previous state; a gate
        // kiosk re-trigger is not an error.
        let updated = sqlx::query(
            "UPDATE parking_slots SET is_available = FALSE WHERE slot_id = $1",
        )
        .bind(&event.slot_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if updated.rows_affected() == 0 {
            return Err(AppError::EntityNotFound(format!(
                "slot {} was not found",
                event.slot_id
            )));
        }

        sqlx::query(
            r#"
                INSERT INTO entries (plate_number, slot_id, entry_time)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(&event.plate_number)
        .bind(&event.slot_id)
        .bind(event.entry_time)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Entry {
            plate_number: event.plate_number,
            slot_id: event.slot_id,
            entry_time: event.entry_time,
        })
    }

    async fn record_exit(&self, event: RecordExit) -> AppResult<Exit> {
        let mut tx = self.db.begin().await?;

        // One open stay per plate is assumed; the latest entry wins.
        let entry: Option<EntryRow> = sqlx::query_as(
            r#"
                SELECT plate_number, slot_id, entry_time
                FROM entries
                WHERE plate_number = $1
                ORDER BY entry_time DESC
                LIMIT 1
            "#,
        )
        .bind(&event.plate_number)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(entry) = entry else {
            return Err(AppError::EntityNotFound(format!(
                "no entry on record for plate {}",
                event.plate_number
            )));
        };

        let duration_minutes = parking::duration_minutes(entry.entry_time, event.exit_time);
        let total_amount = parking::total_amount(duration_minutes, event.rate_per_30_minutes);
        let payment_status = PaymentStatus::Pending;

        sqlx::query(
            r#"
                INSERT INTO exits
                    (plate_number, slot_id, entry_time, exit_time,
                     duration_minutes, total_amount, payment_status)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&event.plate_number)
        .bind(&event.slot_id)
        .bind(entry.entry_time)
        .bind(event.exit_time)
        .bind(duration_minutes)
        .bind(total_amount)
        .bind(payment_status.as_str())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sqlx::query("UPDATE parking_slots SET is_available = TRUE WHERE slot_id = $1")
            .bind(&event.slot_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Exit {
            plate_number: event.plate_number,
            slot_id: event.slot_id,
            entry_time: entry.entry_time,
            exit_time: event.exit_time,
            duration_minutes,
            total_amount,
            payment_status,
        })
    }

    async fn find_history_by_plate(&self, plate_number: &str) -> AppResult<Vec<Exit>> {
        let rows: Vec<ExitRow> = sqlx::query_as(
            r#"
                SELECT plate_number, slot_id, entry_time, exit_time,
                       duration_minutes, total_amount, payment_status
                FROM exits
                WHERE plate_number = $1
                ORDER BY exit_time DESC
            "#,
        )
        .bind(plate_number)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Exit::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use kernel::model::id::SlotId;
    use kernel::model::slot::event::CreateSlot;
    use kernel::repository::slot::SlotRepository;
    use rust_decimal::Decimal;

    use super::*;
    use crate::repository::slot::SlotRepositoryImpl;

    async fn seed_slot(pool: &sqlx::PgPool, slot_id: &str) -> anyhow::Result<()> {
        let repo = SlotRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        repo.create(CreateSlot::new(SlotId::new(slot_id), "level-1".into(), true))
            .await?;
        Ok(())
    }

    // Whole-second timestamps survive the column's millisecond precision
    // unchanged, keeping duration assertions exact.
    fn now_at_second_precision() -> chrono::DateTime<Utc> {
        chrono::DateTime::from_timestamp(Utc::now().timestamp(), 0).unwrap()
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn forty_five_minute_stay_bills_two_blocks(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        seed_slot(&pool, "L1_A1").await?;
        let repo = ParkingRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let entry_time = now_at_second_precision();
        let entry = repo
            .record_entry(RecordEntry::new(
                "ABC-123".into(),
                SlotId::new("L1_A1"),
                entry_time,
            ))
            .await?;
        assert_eq!(entry.plate_number, "ABC-123");

        let occupied: bool =
            sqlx::query_scalar("SELECT is_available FROM parking_slots WHERE slot_id = $1")
                .bind("L1_A1")
                .fetch_one(&pool)
                .await?;
        assert!(!occupied);

        let exit = repo
            .record_exit(RecordExit::new(
                "ABC-123".into(),
                SlotId::new("L1_A1"),
                entry_time + Duration::minutes(45),
                Decimal::new(50, 2),
            ))
            .await?;
        assert_eq!(exit.duration_minutes, 45);
        assert_eq!(exit.total_amount, Decimal::new(100, 2));
        assert_eq!(exit.payment_status, PaymentStatus::Pending);

        let freed: bool =
            sqlx::query_scalar("SELECT is_available FROM parking_slots WHERE slot_id = $1")
                .bind("L1_A1")
                .fetch_one(&pool)
                .await?;
        assert!(freed);

        let history = repo.find_history_by_plate("ABC-123").await?;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].total_amount, Decimal::new(100, 2));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn exit_without_entry_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        seed_slot(&pool, "L1_A1").await?;
        let repo = ParkingRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .record_exit(RecordExit::new(
                "ZZZ-999".into(),
                SlotId::new("L1_A1"),
                Utc::now(),
                Decimal::new(50, 2),
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_entries_resolve_to_the_latest_one(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        seed_slot(&pool, "L1_A1").await?;
        seed_slot(&pool, "L1_A2").await?;
        let repo = ParkingRepositoryImpl::new(ConnectionPool::new(pool));

        let first = now_at_second_precision() - Duration::hours(3);
        let second = now_at_second_precision() - Duration::minutes(20);
        repo.record_entry(RecordEntry::new(
            "ABC-123".into(),
            SlotId::new("L1_A1"),
            first,
        ))
        .await?;
        repo.record_entry(RecordEntry::new(
            "ABC-123".into(),
            SlotId::new("L1_A2"),
            second,
        ))
        .await?;

        let exit = repo
            .record_exit(RecordExit::new(
                "ABC-123".into(),
                SlotId::new("L1_A2"),
                second + Duration::minutes(30),
                Decimal::new(50, 2),
            ))
            .await?;
        // Billed from the most recent entry, not the stale one.
        assert_eq!(exit.entry_time, second);
        assert_eq!(exit.duration_minutes, 30);
        assert_eq!(exit.total_amount, Decimal::new(50, 2));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn history_is_empty_for_unknown_plate(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ParkingRepositoryImpl::new(ConnectionPool::new(pool));
        let history = repo.find_history_by_plate("ZZZ-999").await?;
        assert!(history.is_empty());
        Ok(())
    }
}
