use axum::{Router, routing::any};

use crate::{AppState, controllers::order_controller};

// every method is routed so non-POST requests get the JSON 405 body
pub fn add_routes(router: Router<AppState>, path: &str) -> Router<AppState> {
    router.route(path, any(order_controller::handle_order_event))
}
