//! In-memory doubles for the store, the notifier and the recognizer, so
//! handler behavior can be exercised without Postgres or a vision endpoint.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use adapter::notifier::BroadcastNotifier;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kernel::model::id::{ReservationId, SlotId, UserId};
use kernel::model::parking::event::{RecordEntry, RecordExit};
use kernel::model::parking::{self, Entry, Exit, PaymentStatus};
use kernel::model::plate::DetectedPlate;
use kernel::model::reservation::{event::CreateReservation, Reservation};
use kernel::model::slot::event::{CreateSlot, UpdateAvailability};
use kernel::model::slot::{AvailabilityUpdate, Slot};
use kernel::recognizer::TextRecognizer;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::parking::ParkingRepository;
use kernel::repository::plate::DetectedPlateRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::slot::SlotRepository;
use registry::AppRegistry;
use rust_decimal::Decimal;
use shared::config::BillingConfig;
use shared::error::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryFacility {
    pub slots: Mutex<HashMap<SlotId, Slot>>,
    pub reservations: Mutex<HashMap<ReservationId, Reservation>>,
    pub entries: Mutex<Vec<Entry>>,
    pub exits: Mutex<Vec<Exit>>,
    pub detected: Mutex<Vec<DetectedPlate>>,
}

impl InMemoryFacility {
    pub fn seed_slot(&self, slot_id: &str) {
        self.slots.lock().unwrap().insert(
            SlotId::new(slot_id),
            Slot {
                slot_id: SlotId::new(slot_id),
                level: "level-1".into(),
                is_available: true,
            },
        );
    }

    pub fn seed_entry(&self, plate_number: &str, slot_id: &str, entry_time: DateTime<Utc>) {
        self.entries.lock().unwrap().push(Entry {
            plate_number: plate_number.into(),
            slot_id: SlotId::new(slot_id),
            entry_time,
        });
    }

    pub fn slot_is_available(&self, slot_id: &str) -> bool {
        self.slots
            .lock()
            .unwrap()
            .get(&SlotId::new(slot_id))
            .map(|slot| slot.is_available)
            .unwrap_or(false)
    }
}

#[async_trait]
impl SlotRepository for InMemoryFacility {
    async fn create(&self, event: CreateSlot) -> AppResult<()> {
        self.slots.lock().unwrap().insert(
            event.slot_id.clone(),
            Slot {
                slot_id: event.slot_id,
                level: event.level,
                is_available: event.is_available,
            },
        );
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Slot>> {
        Ok(self.slots.lock().unwrap().values().cloned().collect())
    }

    async fn set_availability(
        &self,
        event: UpdateAvailability,
    ) -> AppResult<AvailabilityUpdate> {
        let mut slots = self.slots.lock().unwrap();
        let Some(slot) = slots.get_mut(&event.slot_id) else {
            return Err(AppError::EntityNotFound(format!(
                "slot {} was not found",
                event.slot_id
            )));
        };
        if slot.is_available == event.is_available {
            return Ok(AvailabilityUpdate::Unchanged);
        }
        slot.is_available = event.is_available;
        Ok(AvailabilityUpdate::Changed)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryFacility {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        // The slot lock is held across the check and the flip, mirroring
        // the store's atomic conditional update.
        let mut slots = self.slots.lock().unwrap();
        let Some(slot) = slots.get_mut(&event.slot_id) else {
            return Err(AppError::EntityNotFound(format!(
                "slot {} was not found",
                event.slot_id
            )));
        };
        if !slot.is_available {
            return Err(AppError::SlotUnavailable(format!(
                "slot {} is not available",
                event.slot_id
            )));
        }
        slot.is_available = false;

        let reservation = Reservation {
            reservation_id: ReservationId::new(),
            user_id: event.user_id,
            slot_id: event.slot_id,
            created_at: event.created_at,
        };
        self.reservations
            .lock()
            .unwrap()
            .insert(reservation.reservation_id, reservation.clone());
        Ok(reservation)
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<SlotId> {
        let Some(reservation) = self.reservations.lock().unwrap().remove(&reservation_id)
        else {
            return Err(AppError::EntityNotFound(format!(
                "reservation {reservation_id} was not found"
            )));
        };
        if let Some(slot) = self.slots.lock().unwrap().get_mut(&reservation.slot_id) {
            slot.is_available = true;
        }
        Ok(reservation.slot_id)
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> AppResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .values()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ParkingRepository for InMemoryFacility {
    async fn record_entry(&self, event: RecordEntry) -> AppResult<Entry> {
        {
            let mut slots = self.slots.lock().unwrap();
            let Some(slot) = slots.get_mut(&event.slot_id) else {
                return Err(AppError::EntityNotFound(format!(
                    "slot {} was not found",
                    event.slot_id
                )));
            };
            slot.is_available = false;
        }
        let entry = Entry {
            plate_number: event.plate_number,
            slot_id: event.slot_id,
            entry_time: event.entry_time,
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn record_exit(&self, event: RecordExit) -> AppResult<Exit> {
        let entry = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.plate_number == event.plate_number)
            .max_by_key(|e| e.entry_time)
            .cloned();
        let Some(entry) = entry else {
            return Err(AppError::EntityNotFound(format!(
                "no entry on record for plate {}",
                event.plate_number
            )));
        };

        let duration_minutes = parking::duration_minutes(entry.entry_time, event.exit_time);
        let exit = Exit {
            plate_number: event.plate_number,
            slot_id: event.slot_id.clone(),
            entry_time: entry.entry_time,
            exit_time: event.exit_time,
            duration_minutes,
            total_amount: parking::total_amount(duration_minutes, event.rate_per_30_minutes),
            payment_status: PaymentStatus::Pending,
        };
        self.exits.lock().unwrap().push(exit.clone());

        if let Some(slot) = self.slots.lock().unwrap().get_mut(&event.slot_id) {
            slot.is_available = true;
        }
        Ok(exit)
    }

    async fn find_history_by_plate(&self, plate_number: &str) -> AppResult<Vec<Exit>> {
        let mut exits: Vec<Exit> = self
            .exits
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.plate_number == plate_number)
            .cloned()
            .collect();
        exits.sort_by_key(|e| std::cmp::Reverse(e.exit_time));
        Ok(exits)
    }
}

#[async_trait]
impl DetectedPlateRepository for InMemoryFacility {
    async fn create(&self, plate_number: String) -> AppResult<()> {
        self.detected.lock().unwrap().push(DetectedPlate {
            plate_number,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<DetectedPlate>> {
        let mut detected: Vec<DetectedPlate> =
            self.detected.lock().unwrap().iter().cloned().collect();
        detected.sort_by_key(|d| std::cmp::Reverse(d.timestamp));
        Ok(detected)
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryFacility {
    async fn check_db(&self) -> bool {
        true
    }
}

pub struct StubRecognizer(pub Vec<String>);

#[async_trait]
impl TextRecognizer for StubRecognizer {
    async fn recognize(&self, _image: &[u8]) -> AppResult<Vec<String>> {
        Ok(self.0.clone())
    }
}

pub fn test_registry(facility: Arc<InMemoryFacility>, recognized: Vec<String>) -> AppRegistry {
    AppRegistry::from_parts(
        facility.clone(),
        facility.clone(),
        facility.clone(),
        facility.clone(),
        facility,
        Arc::new(BroadcastNotifier::new(16)),
        Arc::new(StubRecognizer(recognized)),
        BillingConfig {
            rate_per_30_minutes: Decimal::new(50, 2),
        },
    )
}
