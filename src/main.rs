//! geotrail
//!
//! Records device location beacons and serves per-device history as
//! GeoJSON. Built with Tokio and Axum.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use geotrail::config;
use geotrail::http::{AppState, HttpServer};
use geotrail::identity::DeviceHasher;
use geotrail::storage::MongoBeaconStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geotrail=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("geotrail v0.1.0 starting");

    // Load configuration (defaults, optional file, environment secrets)
    let config = config::load()?;

    tracing::info!(
        bind_address = %config.server.bind_address,
        database = %config.database.database,
        collection = %config.database.collection,
        request_timeout_secs = config.server.request_timeout_secs,
        "Configuration loaded"
    );

    let hasher = Arc::new(DeviceHasher::new(&config.hashing.device_key));
    let store = MongoBeaconStore::connect(&config.database).await?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let state = AppState {
        store: Arc::new(store),
        hasher,
    };
    let server = HttpServer::new(&config, state);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
