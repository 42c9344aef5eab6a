//! Logging and metrics setup.

use catalog_config::ObservabilityConfig;
use catalog_core::{CatalogError, CatalogResult};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives for a configured base level.
fn default_directives(level: &str) -> String {
    format!("{},catalog=debug,tower_http=debug", level.to_lowercase())
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Installs the Prometheus recorder and registers metric descriptions.
pub fn install_metrics() -> CatalogResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| CatalogError::Configuration(format!("Failed to install metrics recorder: {}", e)))?;

    catalog_service::metrics::register_metrics();
    info!("Prometheus metrics recorder installed");
    Ok(handle)
}
