use axum::Router;

use crate::{AppState, controllers::home_controller};

pub mod home_routes;
pub mod order_routes;

pub fn app(state: AppState) -> Router {
    let router = Router::<AppState>::new();

    let router = home_routes::add_routes(router);
    let router = order_routes::add_routes(router, &state.settings.order_events_path);

    router
        .fallback(home_controller::not_found)
        .with_state(state)
}
