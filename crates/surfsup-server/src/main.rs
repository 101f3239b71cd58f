//! Server binary for the SurfsUp climate API.
//!
//! Wires configuration, logging, the climate database connection factory,
//! and the HTTP server together, then serves until `Ctrl-C`.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `surfsup-config.yaml` (or defaults)
//! 2. Initialize structured logging (tracing)
//! 3. Build the read-only connection factory and check the database opens
//! 4. Serve the API

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use surfsup_api::{AppState, start_server};
use surfsup_db::ConnectionFactory;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig, ServiceConfig};
use crate::error::StartupError;

/// Name of the configuration file looked up in the working directory.
const CONFIG_FILE: &str = "surfsup-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, the database check, or the server
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("surfsup-server starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        database_url = config.database.url,
        "Configuration loaded"
    );

    // 3. Connection factory.
    let connections = ConnectionFactory::new(&config.database.to_sqlite_config())
        .map_err(StartupError::from)?;
    connections.verify().await.map_err(StartupError::from)?;

    // 4. Serve.
    let state = Arc::new(AppState::new(connections));
    start_server(&config.server.to_server_config(), state)
        .await
        .map_err(StartupError::from)?;

    info!("surfsup-server shutdown complete");
    Ok(())
}

/// Load the service configuration from `surfsup-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<ServiceConfig, StartupError> {
    let config_path = Path::new(CONFIG_FILE);
    let config = if config_path.exists() {
        ServiceConfig::from_file(config_path)?
    } else {
        ServiceConfig::from_env()?
    };
    Ok(config)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init(),
    }
}
