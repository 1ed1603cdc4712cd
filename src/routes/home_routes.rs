use axum::{Router, routing::get};
use crate::{AppState, config::HEALTH_PATH, controllers::home_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route(HEALTH_PATH, get(home_controller::health))
}
