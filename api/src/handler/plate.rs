use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use kernel::model::plate::{match_plate, PlateResult};
use kernel::recognizer::TextRecognizer;
use kernel::repository::plate::DetectedPlateRepository;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::plate::{DetectedPlatesResponse, ScanPlateResponse};

/// Runs the OCR pipeline on the posted image. A recognized image without a
/// plate-shaped substring is still a success; only a missing image or an
/// image with no text at all is rejected.
pub async fn scan_plate(
    State(registry): State<AppRegistry>,
    body: Bytes,
) -> AppResult<Json<ScanPlateResponse>> {
    if body.is_empty() {
        return Err(AppError::NoImageProvided);
    }

    let lines = registry.text_recognizer().recognize(&body).await?;
    let Some(first_line) = lines.first() else {
        return Err(AppError::NoTextDetected);
    };

    match match_plate(first_line) {
        PlateResult::Found(plate) => {
            let repo = registry.detected_plate_repository();
            let audit_plate = plate.clone();
            // The audit write must not delay or fail the scan response.
            tokio::spawn(async move {
                if let Err(e) = repo.create(audit_plate).await {
                    tracing::warn!(
                        error.cause_chain = ?e,
                        "failed to persist detected plate"
                    );
                }
            });

            Ok(Json(ScanPlateResponse {
                plate_number: Some(plate),
                message: "plate detected".into(),
            }))
        }
        PlateResult::NotFound => Ok(Json(ScanPlateResponse {
            plate_number: None,
            message: "no plate found in image".into(),
        })),
    }
}

pub async fn show_detected_plates(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DetectedPlatesResponse>> {
    let plates = registry
        .detected_plate_repository()
        .find_all()
        .await?
        .into_iter()
        .map(|detected| detected.plate_number)
        .collect();

    Ok(Json(DetectedPlatesResponse { plates }))
}
