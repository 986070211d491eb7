use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::notifier::BroadcastNotifier;
use adapter::recognizer::HttpTextRecognizer;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::parking::ParkingRepositoryImpl;
use adapter::repository::plate::DetectedPlateRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::slot::SlotRepositoryImpl;
use kernel::notifier::SlotEventNotifier;
use kernel::recognizer::TextRecognizer;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::parking::ParkingRepository;
use kernel::repository::plate::DetectedPlateRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::slot::SlotRepository;
use shared::config::{AppConfig, BillingConfig};

const EVENT_CHANNEL_CAPACITY: usize = 128;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    slot_repository: Arc<dyn SlotRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    parking_repository: Arc<dyn ParkingRepository>,
    detected_plate_repository: Arc<dyn DetectedPlateRepository>,
    slot_event_notifier: Arc<dyn SlotEventNotifier>,
    text_recognizer: Arc<dyn TextRecognizer>,
    billing_config: BillingConfig,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: &AppConfig) -> anyhow::Result<Self> {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let slot_repository = Arc::new(SlotRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        let parking_repository = Arc::new(ParkingRepositoryImpl::new(pool.clone()));
        let detected_plate_repository =
            Arc::new(DetectedPlateRepositoryImpl::new(pool.clone()));
        let slot_event_notifier = Arc::new(BroadcastNotifier::new(EVENT_CHANNEL_CAPACITY));
        let text_recognizer = Arc::new(HttpTextRecognizer::new(&app_config.vision)?);
        Ok(Self {
            health_check_repository,
            slot_repository,
            reservation_repository,
            parking_repository,
            detected_plate_repository,
            slot_event_notifier,
            text_recognizer,
            billing_config: app_config.billing.clone(),
        })
    }

    /// Wires the registry from pre-built parts; lets tests substitute
    /// in-memory fakes for the store, the notifier and the recognizer.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        slot_repository: Arc<dyn SlotRepository>,
        reservation_repository: Arc<dyn ReservationRepository>,
        parking_repository: Arc<dyn ParkingRepository>,
        detected_plate_repository: Arc<dyn DetectedPlateRepository>,
        slot_event_notifier: Arc<dyn SlotEventNotifier>,
        text_recognizer: Arc<dyn TextRecognizer>,
        billing_config: BillingConfig,
    ) -> Self {
        Self {
            health_check_repository,
            slot_repository,
            reservation_repository,
            parking_repository,
            detected_plate_repository,
            slot_event_notifier,
            text_recognizer,
            billing_config,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn slot_repository(&self) -> Arc<dyn SlotRepository> {
        self.slot_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn parking_repository(&self) -> Arc<dyn ParkingRepository> {
        self.parking_repository.clone()
    }

    pub fn detected_plate_repository(&self) -> Arc<dyn DetectedPlateRepository> {
        self.detected_plate_repository.clone()
    }

    pub fn slot_event_notifier(&self) -> Arc<dyn SlotEventNotifier> {
        self.slot_event_notifier.clone()
    }

    pub fn text_recognizer(&self) -> Arc<dyn TextRecognizer> {
        self.text_recognizer.clone()
    }

    pub fn billing_config(&self) -> &BillingConfig {
        &self.billing_config
    }
}
