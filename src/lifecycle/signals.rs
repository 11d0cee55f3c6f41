//! OS signal handling.
//!
//! # Responsibilities
//! - Translate SIGINT/SIGTERM into a shutdown trigger
//! - Translate SIGHUP into a config reload
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGHUP triggers config reload, not shutdown

use std::path::PathBuf;

use tokio::sync::mpsc;

use crate::config::watcher::reload;
use crate::config::AppConfig;
use crate::lifecycle::Shutdown;

/// Wait for ctrl-c or SIGTERM, then trigger `shutdown`.
pub async fn watch_shutdown(shutdown: Shutdown) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Termination signal received");
    shutdown.trigger();
}

/// Reload the config file on every SIGHUP until shutdown.
#[cfg(unix)]
pub async fn watch_reload(
    path: PathBuf,
    tx: mpsc::UnboundedSender<AppConfig>,
    shutdown: Shutdown,
) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(sig) => sig,
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for SIGHUP");
            return;
        }
    };
    let mut stop = shutdown.subscribe();

    loop {
        tokio::select! {
            _ = hangup.recv() => {
                tracing::info!(path = ?path, "SIGHUP received, reloading configuration");
                reload(&path, &tx);
            }
            _ = stop.recv() => break,
        }
    }
}

#[cfg(not(unix))]
pub async fn watch_reload(
    _path: PathBuf,
    _tx: mpsc::UnboundedSender<AppConfig>,
    _shutdown: Shutdown,
) {
}
