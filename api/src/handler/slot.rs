use axum::extract::{Path, State};
use axum::Json;
use kernel::model::id::SlotId;
use kernel::model::slot::event::UpdateAvailability;
use kernel::model::slot::AvailabilityUpdate;
use kernel::notifier::{SlotEvent, SlotEventNotifier};
use kernel::repository::slot::SlotRepository;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::slot::{MessageResponse, SlotsResponse, UpdateAvailabilityRequest};

pub async fn show_slot_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SlotsResponse>> {
    registry
        .slot_repository()
        .find_all()
        .await
        .map(SlotsResponse::from)
        .map(Json)
}

/// Operational override of a slot's availability flag. Broadcasts only when
/// the stored value actually changed.
pub async fn update_slot_availability(
    Path(slot_id): Path<SlotId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateAvailabilityRequest>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = registry
        .slot_repository()
        .set_availability(UpdateAvailability::new(slot_id.clone(), req.is_available))
        .await?;

    if outcome == AvailabilityUpdate::Changed {
        registry
            .slot_event_notifier()
            .publish(SlotEvent::availability_changed(&slot_id, req.is_available));
    }

    Ok(Json(MessageResponse {
        message: format!("slot {slot_id} updated"),
    }))
}
