//! Metrics collection and exposition.
//!
//! # Metrics
//! - `select_lang_selections_total` (counter): selections by variable, source
//! - `select_lang_config_reloads_total` (counter): reload attempts by result
//!
//! # Design Decisions
//! - Recording before the exporter is installed is a no-op
//! - Source label is one of cookie, header, default

use std::net::SocketAddr;

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::negotiation::Source;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one resolved variable.
pub fn record_selection(variable: &str, source: Source) {
    counter!(
        "select_lang_selections_total",
        "variable" => variable.to_string(),
        "source" => source.as_str()
    )
    .increment(1);
}

/// Count one configuration reload attempt.
pub fn record_reload(ok: bool) {
    let result = if ok { "success" } else { "failure" };
    counter!("select_lang_config_reloads_total", "result" => result).increment(1);
}
