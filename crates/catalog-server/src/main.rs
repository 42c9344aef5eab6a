//! # Catalog Server
//!
//! Main entry point for the catalog service: loads configuration, connects
//! the primary/replica stores, wires the DI module, starts the cache
//! readiness probe and serves the REST API until Ctrl+C or SIGTERM.

use catalog_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::StoreRouter;
use catalog_rest::{create_router, MetricsRoute};
use catalog_server::di::{build_cache_backend, build_module, ServiceResolver};
use catalog_server::{startup, telemetry};
use catalog_service::spawn_readiness_probe;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            telemetry::init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    telemetry::init_logging(&config.observability);
    startup::print_banner();

    info!("Starting catalog server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> CatalogResult<()> {
    info!("Environment: {}", config.app.environment);

    let metrics = if config.observability.metrics_enabled {
        Some(MetricsRoute {
            path: config.observability.metrics_path.clone(),
            handle: telemetry::install_metrics()?,
        })
    } else {
        None
    };

    let store_router = StoreRouter::connect(&config.database).await?;
    let cache_backend = build_cache_backend(&config.cache)?;
    let module = build_module(store_router, cache_backend);

    let probe = config
        .cache
        .enabled
        .then(|| spawn_readiness_probe(module.cache(), config.cache.probe_interval()));

    let router = create_router(module.as_ref(), &config.server, metrics);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    startup::print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::Internal(format!("REST server error: {}", e)))?;

    if let Some(probe) = probe {
        probe.abort();
    }
    module.store_router().close().await;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
