use std::env;

use crate::services::order_store::SaveMode;

pub const HEALTH_PATH: &str = "/health";

/// Paths already taken by other routes; the order endpoint can't share them.
pub const RESERVED_PATHS: [&str; 1] = [HEALTH_PATH];

#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    /// Path the order endpoint is mounted on.
    pub order_events_path: String,

    /// `EnvFilter` directive for the log subscriber.
    pub log_filter: String,

    pub store_mode: SaveMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            order_events_path: "/".to_string(),
            log_filter: "info".to_string(),
            store_mode: SaveMode::Accept,
        }
    }
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let defaults = Settings::default();

    let host = env::var("HOST").unwrap_or(defaults.host);

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(defaults.port);

    let order_events_path = env::var("ORDER_EVENTS_PATH")
        .ok()
        .and_then(|p| parse_order_events_path(&p))
        .unwrap_or(defaults.order_events_path);

    let log_filter = env::var("LOG_FILTER").unwrap_or(defaults.log_filter);

    let store_mode = env::var("ORDER_STORE_MODE")
        .ok()
        .and_then(|s| s.parse::<SaveMode>().ok())
        .unwrap_or(defaults.store_mode);

    Settings {
        host,
        port,
        order_events_path,
        log_filter,
        store_mode,
    }
}

/// Accepts absolute paths that don't collide with another route.
pub fn parse_order_events_path(raw: &str) -> Option<String> {
    let path = raw.trim();
    if !path.starts_with('/') || RESERVED_PATHS.contains(&path) {
        return None;
    }
    Some(path.to_string())
}
