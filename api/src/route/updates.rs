use axum::routing::get;
use axum::Router;
use registry::AppRegistry;

use crate::handler::updates::subscribe_updates;

pub fn build_updates_router() -> Router<AppRegistry> {
    Router::new().route("/updates", get(subscribe_updates))
}
