use axum::routing::{delete, get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, reserve_slot, show_reservations_by_user,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(reserve_slot))
        .route("/:reservation_id", delete(cancel_reservation))
        .route("/users/:user_id", get(show_reservations_by_user));

    Router::new().nest("/reservations", reservation_routers)
}
