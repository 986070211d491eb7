use async_trait::async_trait;
use derive_new::new;
use kernel::model::slot::event::{CreateSlot, UpdateAvailability};
use kernel::model::slot::{AvailabilityUpdate, Slot};
use kernel::repository::slot::SlotRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::slot::SlotRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct SlotRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SlotRepository for SlotRepositoryImpl {
    async fn create(&self, event: CreateSlot) -> AppResult<()> {
        // Slot ids are fixed by the physical layout; re-seeding must not
        // clobber the availability of a slot already in use.
        sqlx::query(
            r#"
                INSERT INTO parking_slots (slot_id, level, is_available)
                VALUES ($1, $2, $3)
                ON CONFLICT (slot_id) DO NOTHING
            "#,
        )
        .bind(&event.slot_id)
        .bind(&event.level)
        .bind(event.is_available)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Slot>> {
        let rows: Vec<SlotRow> = sqlx::query_as(
            r#"
                SELECT slot_id, level, is_available
                FROM parking_slots
                ORDER BY slot_id
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Slot::from).collect())
    }

    async fn set_availability(
        &self,
        event: UpdateAvailability,
    ) -> AppResult<AvailabilityUpdate> {
        // Writing only when the value differs lets the caller emit exactly
        // one broadcast per actual transition.
        let res = sqlx::query(
            r#"
                UPDATE parking_slots
                SET is_available = $2
                WHERE slot_id = $1 AND is_available <> $2
            "#,
        )
        .bind(&event.slot_id)
        .bind(event.is_available)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() == 1 {
            return Ok(AvailabilityUpdate::Changed);
        }

        let exists = sqlx::query("SELECT slot_id FROM parking_slots WHERE slot_id = $1")
            .bind(&event.slot_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        match exists {
            Some(_) => Ok(AvailabilityUpdate::Unchanged),
            None => Err(AppError::EntityNotFound(format!(
                "slot {} was not found",
                event.slot_id
            ))),
        }
    }
}
