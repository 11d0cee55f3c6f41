//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and metrics
//! - Start background tasks (file watcher, signal handlers)
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::watcher::ConfigWatcher;
use crate::config::validation::validate_config;
use crate::config::{read_config, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::observability::{logging, metrics};
use crate::variables::VariableError;

/// Fatal errors during startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging error: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("invalid address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("config watcher error: {0}")]
    Watch(#[from] notify::Error),

    #[error("{} invalid language variable(s)", .0.len())]
    Variables(Vec<VariableError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load `config_path` and serve until a termination signal arrives.
pub async fn run(config_path: PathBuf) -> Result<(), StartupError> {
    let config = read_config(&config_path)?;

    logging::init_logging(&config.observability)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        path = ?config_path,
        "select-lang starting"
    );

    // after logging so name warnings are visible
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        variables = config.select_lang.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let (watcher, config_updates) = ConfigWatcher::new(&config_path);
    let reload_tx = watcher.sender();
    // dropping the handle stops the watch
    let _watch_handle = watcher.run()?;

    tokio::spawn(signals::watch_shutdown(shutdown.clone()));
    tokio::spawn(signals::watch_reload(
        config_path.clone(),
        reload_tx,
        shutdown.clone(),
    ));

    let server = HttpServer::new(config).map_err(StartupError::Variables)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, config_updates, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
