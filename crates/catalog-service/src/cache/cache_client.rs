//! Best-effort cache client.

use super::CacheBackend;
use crate::metrics::CacheMetrics;
use async_trait::async_trait;
use catalog_core::Interface;
use shaku::Component;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Cache operations that never fail the caller.
///
/// When the client is not ready an operation performs no I/O. Backend
/// errors are logged, counted and swallowed: `get` degrades to a miss,
/// `set` and `delete` become no-ops.
#[async_trait]
pub trait CacheClient: Interface + Send + Sync {
    /// Whether the backend connection is currently established.
    fn is_ready(&self) -> bool;

    /// Gets a cached value.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores a value with an expiry.
    async fn set(&self, key: &str, value: &str, ttl: Duration);

    /// Removes a value.
    async fn delete(&self, key: &str);

    /// Pings the backend and updates readiness. Returns the new state.
    async fn refresh_readiness(&self) -> bool;
}

/// Cache client over an optional backend and a readiness flag.
///
/// Starts not ready; the readiness probe flips it once the backend answers.
/// Only the probe changes the flag. A failed command is absorbed and leaves
/// the flag alone, so later invalidations still reach a live backend.
#[derive(Component)]
#[shaku(interface = CacheClient)]
pub struct ResilientCache {
    backend: Option<Arc<dyn CacheBackend>>,
    ready: AtomicBool,
}

impl ResilientCache {
    /// Creates a client over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend: Some(backend),
            ready: AtomicBool::new(false),
        }
    }

    /// Creates a client with no backend. It is never ready.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            backend: None,
            ready: AtomicBool::new(false),
        }
    }

    /// Returns true if a backend is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Returns the backend when the client is ready, recording a skip otherwise.
    fn ready_backend(&self, operation: &'static str) -> Option<&Arc<dyn CacheBackend>> {
        let backend = self.backend.as_ref()?;
        if self.is_ready() {
            Some(backend)
        } else {
            debug!("Cache not ready, skipping {}", operation);
            CacheMetrics::skipped(operation);
            None
        }
    }

    fn absorb(&self, operation: &'static str, key: &str, error: &catalog_core::CatalogError) {
        warn!(key = %key, "Cache {} failed, continuing without cache: {}", operation, error);
        CacheMetrics::error(operation);
    }
}

#[async_trait]
impl CacheClient for ResilientCache {
    fn is_ready(&self) -> bool {
        self.backend.is_some() && self.ready.load(Ordering::Acquire)
    }

    async fn get(&self, key: &str) -> Option<String> {
        let backend = self.ready_backend("get")?;
        match backend.get_raw(key).await {
            Ok(Some(value)) => {
                debug!("Cache hit for key '{}'", key);
                CacheMetrics::hit();
                Some(value)
            }
            Ok(None) => {
                debug!("Cache miss for key '{}'", key);
                CacheMetrics::miss();
                None
            }
            Err(e) => {
                self.absorb("get", key, &e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) {
        let Some(backend) = self.ready_backend("set") else {
            return;
        };
        if let Err(e) = backend.set_raw(key, value, ttl).await {
            self.absorb("set", key, &e);
        }
    }

    async fn delete(&self, key: &str) {
        let Some(backend) = self.ready_backend("delete") else {
            return;
        };
        match backend.delete_raw(key).await {
            Ok(existed) => debug!("Invalidated key '{}': {}", key, existed),
            Err(e) => self.absorb("delete", key, &e),
        }
    }

    async fn refresh_readiness(&self) -> bool {
        let Some(backend) = &self.backend else {
            return false;
        };

        let ready = match backend.ping().await {
            Ok(()) => true,
            Err(e) => {
                debug!("Cache probe failed: {}", e);
                false
            }
        };

        let was_ready = self.ready.swap(ready, Ordering::AcqRel);
        match (was_ready, ready) {
            (false, true) => info!("Cache backend '{}' is ready", backend.name()),
            (true, false) => warn!("Cache backend '{}' is no longer reachable", backend.name()),
            _ => {}
        }
        ready
    }
}

impl std::fmt::Debug for ResilientCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResilientCache")
            .field("backend", &self.backend.as_ref().map(|b| b.name()))
            .field("ready", &self.is_ready())
            .finish()
    }
}

/// Spawns the liveness probe.
///
/// Probes once immediately, then every `interval`, so readiness follows
/// the backend connection and recovers on its own after an outage.
pub fn spawn_readiness_probe(cache: Arc<dyn CacheClient>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            cache.refresh_readiness().await;
        }
    })
}
