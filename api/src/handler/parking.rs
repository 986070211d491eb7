use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use garde::Validate;
use kernel::model::id::SlotId;
use kernel::model::parking::event::{RecordEntry, RecordExit};
use kernel::notifier::{SlotEvent, SlotEventNotifier};
use kernel::repository::parking::ParkingRepository;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::parking::{
    EntryResponse, ExitResponse, ExitsResponse, RecordEntryRequest, RecordExitRequest,
};

pub async fn record_entry(
    State(registry): State<AppRegistry>,
    Json(req): Json<RecordEntryRequest>,
) -> AppResult<(StatusCode, Json<EntryResponse>)> {
    req.validate(&())?;

    let event = RecordEntry::new(req.plate_number, SlotId::new(req.slot_id), Utc::now());
    let entry = registry.parking_repository().record_entry(event).await?;

    registry
        .slot_event_notifier()
        .publish(SlotEvent::occupied(&entry.slot_id));

    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            message: "entry recorded".into(),
            plate_number: entry.plate_number,
        }),
    ))
}

pub async fn record_exit(
    State(registry): State<AppRegistry>,
    Json(req): Json<RecordExitRequest>,
) -> AppResult<(StatusCode, Json<ExitResponse>)> {
    req.validate(&())?;

    let event = RecordExit::new(
        req.plate_number,
        SlotId::new(req.slot_id),
        Utc::now(),
        registry.billing_config().rate_per_30_minutes,
    );
    let exit = registry.parking_repository().record_exit(event).await?;

    registry
        .slot_event_notifier()
        .publish(SlotEvent::released(&exit.slot_id));

    Ok((
        StatusCode::CREATED,
        Json(ExitResponse {
            message: "exit recorded".into(),
            plate_number: exit.plate_number,
            duration_minutes: exit.duration_minutes,
            total_amount: exit.total_amount,
        }),
    ))
}

pub async fn show_parking_history(
    Path(plate_number): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ExitsResponse>> {
    registry
        .parking_repository()
        .find_history_by_plate(&plate_number)
        .await
        .map(ExitsResponse::from)
        .map(Json)
}
