//! Library entrypoint for the order event service.
//!
//! The binary in `main.rs` only wires settings, logging and the listener;
//! integration tests under `tests/` build the same router from here.

use std::sync::Arc;

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub mod controllers;
pub mod routes;

use services::order_store::{OrderStore, StubOrderStore};

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(settings: config::Settings, store: Arc<dyn OrderStore>) -> Self {
        Self { settings, store }
    }

    /// State backed by the stub store configured in `settings`.
    pub fn from_settings(settings: config::Settings) -> Self {
        let store = Arc::new(StubOrderStore::new(settings.store_mode));
        Self::new(settings, store)
    }
}
