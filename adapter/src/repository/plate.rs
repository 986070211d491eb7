use async_trait::async_trait;
use derive_new::new;
use kernel::model::plate::DetectedPlate;
use kernel::repository::plate::DetectedPlateRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::plate::DetectedPlateRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct DetectedPlateRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl DetectedPlateRepository for DetectedPlateRepositoryImpl {
    async fn create(&self, plate_number: String) -> AppResult<()> {
        sqlx::query("INSERT INTO detected_plates (plate_number) VALUES ($1)")
            .bind(&plate_number)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<DetectedPlate>> {
        let rows: Vec<DetectedPlateRow> = sqlx::query_as(
            r#"
                SELECT plate_number, detected_at
                FROM detected_plates
                ORDER BY detected_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(DetectedPlate::from).collect())
    }
}
