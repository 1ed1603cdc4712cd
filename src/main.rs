use std::net::SocketAddr;

use order_events::{config, routes, AppState};
use tracing_subscriber::EnvFilter;

fn init_tracing(settings: &config::Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!("unable to listen for shutdown signal: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::load();
    init_tracing(&settings);

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>()?, settings.port));
    tracing::info!(
        store_mode = ?settings.store_mode,
        "order events on http://{}{}",
        addr,
        settings.order_events_path
    );

    let app = routes::app(AppState::from_settings(settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
