use axum::routing::{get, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::slot::{show_slot_list, update_slot_availability};

pub fn build_slot_routers() -> Router<AppRegistry> {
    let slot_routers = Router::new()
        .route("/", get(show_slot_list))
        .route("/:slot_id/availability", put(update_slot_availability));

    Router::new().nest("/slots", slot_routers)
}
