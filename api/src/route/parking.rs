use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::parking::{record_entry, record_exit, show_parking_history};

pub fn build_parking_routers() -> Router<AppRegistry> {
    let parking_routers = Router::new()
        .route("/entries", post(record_entry))
        .route("/exits", post(record_exit))
        .route("/history/:plate_number", get(show_parking_history));

    Router::new().nest("/parking", parking_routers)
}
