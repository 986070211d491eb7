use axum::Router;
use registry::AppRegistry;

use super::health::build_health_check_routers;
use super::parking::build_parking_routers;
use super::plate::build_plate_routers;
use super::reservation::build_reservation_routers;
use super::slot::build_slot_routers;
use super::updates::build_updates_router;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_slot_routers())
        .merge(build_reservation_routers())
        .merge(build_parking_routers())
        .merge(build_plate_routers())
        .merge(build_updates_router());
    Router::new().nest("/api/v1", router)
}
