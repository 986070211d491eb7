use async_trait::async_trait;
use derive_new::new;
use kernel::model::id::{ReservationId, SlotId, UserId};
use kernel::model::reservation::{event::CreateReservation, Reservation};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::reservation::ReservationRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        // The availability check and the flip are one conditional statement.
        // Two concurrent attempts cannot both pass: the row lock serializes
        // them and the loser matches zero rows.
        let flipped = sqlx::query(
            r#"
                UPDATE parking_slots
                SET is_available = FALSE
                WHERE slot_id = $1 AND is_available = TRUE
            "#,
        )
        .bind(&event.slot_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if flipped.rows_affected() == 0 {
            let exists = sqlx::query("SELECT slot_id FROM parking_slots WHERE slot_id = $1")
                .bind(&event.slot_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

            return Err(match exists {
                Some(_) => AppError::SlotUnavailable(format!(
                    "slot {} is not available",
                    event.slot_id
                )),
                None => {
                    AppError::EntityNotFound(format!("slot {} was not found", event.slot_id))
                }
            });
        }

        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations (reservation_id, user_id, slot_id, created_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(reservation_id)
        .bind(&event.user_id)
        .bind(&event.slot_id)
        .bind(event.created_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(Reservation {
            reservation_id,
            user_id: event.user_id,
            slot_id: event.slot_id,
            created_at: event.created_at,
        })
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<SlotId> {
        let mut tx = self.db.begin().await?;

        let slot_id: Option<SlotId> = sqlx::query_scalar(
            r#"
                DELETE FROM reservations
                WHERE reservation_id = $1
                RETURNING slot_id
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(slot_id) = slot_id else {
            return Err(AppError::EntityNotFound(format!(
                "reservation {reservation_id} was not found"
            )));
        };

        sqlx::query("UPDATE parking_slots SET is_available = TRUE WHERE slot_id = $1")
            .bind(&slot_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(slot_id)
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, user_id, slot_id, created_at
                FROM reservations
                WHERE user_id = $1
                ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use kernel::model::slot::event::CreateSlot;
    use kernel::repository::slot::SlotRepository;

    use super::*;
    use crate::repository::slot::SlotRepositoryImpl;

    async fn seed_slot(pool: &sqlx::PgPool, slot_id: &str) -> anyhow::Result<()> {
        let repo = SlotRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        repo.create(CreateSlot::new(SlotId::new(slot_id), "level-1".into(), true))
            .await?;
        Ok(())
    }

    async fn slot_is_available(pool: &sqlx::PgPool, slot_id: &str) -> anyhow::Result<bool> {
        let available: bool =
            sqlx::query_scalar("SELECT is_available FROM parking_slots WHERE slot_id = $1")
                .bind(slot_id)
                .fetch_one(pool)
                .await?;
        Ok(available)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn reserve_flips_slot_and_cancel_restores_it(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        seed_slot(&pool, "L1_A1").await?;
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let reservation = repo
            .create(CreateReservation::new(
                UserId::new("user-1"),
                SlotId::new("L1_A1"),
                Utc::now(),
            ))
            .await?;
        assert!(!slot_is_available(&pool, "L1_A1").await?);

        // A second attempt against the held slot conflicts.
        let second = repo
            .create(CreateReservation::new(
                UserId::new("user-2"),
                SlotId::new("L1_A1"),
                Utc::now(),
            ))
            .await;
        assert!(matches!(second, Err(AppError::SlotUnavailable(_))));

        let freed = repo.delete(reservation.reservation_id).await?;
        assert_eq!(freed.as_str(), "L1_A1");
        assert!(slot_is_available(&pool, "L1_A1").await?);

        // Cancelling twice fails and must not flip the slot again.
        let again = repo.delete(reservation.reservation_id).await;
        assert!(matches!(again, Err(AppError::EntityNotFound(_))));
        assert!(slot_is_available(&pool, "L1_A1").await?);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn reserving_unknown_slot_is_not_found(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));
        let res = repo
            .create(CreateReservation::new(
                UserId::new("user-1"),
                SlotId::new("L9_Z9"),
                Utc::now(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn concurrent_reservations_yield_exactly_one_success(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        seed_slot(&pool, "L1_B2").await?;
        let repo = Arc::new(ReservationRepositoryImpl::new(ConnectionPool::new(
            pool.clone(),
        )));

        let mut handles = Vec::new();
        for n in 0..8 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(CreateReservation::new(
                    UserId::new(format!("user-{n}")),
                    SlotId::new("L1_B2"),
                    Utc::now(),
                ))
                .await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await? {
                Ok(_) => successes += 1,
                Err(AppError::SlotUnavailable(_)) => conflicts += 1,
                Err(e) => return Err(e.into()),
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(conflicts, 7);
        assert!(!slot_is_available(&pool, "L1_B2").await?);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn listing_by_user_returns_empty_for_unknown_user(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = ReservationRepositoryImpl::new(ConnectionPool::new(pool));
        let reservations = repo.find_by_user_id(&UserId::new("nobody")).await?;
        assert!(reservations.is_empty());
        Ok(())
    }
}
