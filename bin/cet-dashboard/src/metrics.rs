//! Prometheus exporter for the dashboard metrics.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Install the Prometheus metrics exporter and start the HTTP server.
///
/// Also registers the dashboard metric descriptions.
pub fn install_prometheus_exporter(port: u16) -> eyre::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| eyre::eyre!("Failed to install Prometheus exporter: {}", e))?;

    dashboard::metrics::register_descriptions();
    Ok(())
}
