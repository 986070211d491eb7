use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use garde::Validate;
use kernel::model::id::{ReservationId, SlotId, UserId};
use kernel::model::reservation::event::CreateReservation;
use kernel::notifier::{SlotEvent, SlotEventNotifier};
use kernel::repository::reservation::ReservationRepository;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::reservation::{
    CreateReservationRequest, ReservationsResponse, ReserveResponse,
};
use crate::model::slot::MessageResponse;

pub async fn reserve_slot(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReserveResponse>)> {
    req.validate(&())?;

    let event = CreateReservation::new(
        UserId::new(req.user_id),
        SlotId::new(req.slot_id),
        Utc::now(),
    );
    let reservation = registry.reservation_repository().create(event).await?;

    registry
        .slot_event_notifier()
        .publish(SlotEvent::reserved(&reservation.slot_id));

    Ok((
        StatusCode::CREATED,
        Json(ReserveResponse {
            message: "reservation created".into(),
            slot_id: reservation.slot_id,
        }),
    ))
}

pub async fn cancel_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    let slot_id = registry
        .reservation_repository()
        .delete(reservation_id)
        .await?;

    registry
        .slot_event_notifier()
        .publish(SlotEvent::reservation_cancelled(&slot_id));

    Ok(Json(MessageResponse {
        message: "reservation cancelled".into(),
    }))
}

pub async fn show_reservations_by_user(
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_by_user_id(&user_id)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}
