use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::plate::{scan_plate, show_detected_plates};

pub fn build_plate_routers() -> Router<AppRegistry> {
    let plate_routers = Router::new()
        .route("/scan", post(scan_plate))
        .route("/detected", get(show_detected_plates));

    Router::new().nest("/plates", plate_routers)
}
