//! Primary/replica store routing.
//!
//! Writes go to the primary pool, plain reads go to the replica pool.
//! Both pools are created once at startup and shared by every request.

use async_trait::async_trait;
use catalog_config::DatabaseConfig;
use catalog_core::{CatalogError, CatalogResult, Interface};
use shaku::Component;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::fmt;
use tracing::{info, warn};

/// Which store a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreTarget {
    /// Read-write store.
    Primary,
    /// Read-only store, may lag the primary.
    Replica,
}

impl fmt::Display for StoreTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Replica => write!(f, "replica"),
        }
    }
}

/// Interface for routing queries to the primary or replica store.
#[async_trait]
pub trait StoreRouterInterface: Interface + Send + Sync {
    /// Returns the pool for the given target.
    fn pool(&self, target: StoreTarget) -> &PgPool;

    /// Returns the read-write pool. Used for inserts and updates.
    fn primary(&self) -> &PgPool {
        self.pool(StoreTarget::Primary)
    }

    /// Returns the read-only pool. Used for plain reads.
    fn replica(&self) -> &PgPool {
        self.pool(StoreTarget::Replica)
    }

    /// Checks that the target store answers queries.
    async fn health_check(&self, target: StoreTarget) -> CatalogResult<()>;

    /// Closes both pools.
    async fn close(&self);
}

/// Store router holding one pool per store.
#[derive(Component)]
#[shaku(interface = StoreRouterInterface)]
pub struct StoreRouter {
    primary: PgPool,
    replica: PgPool,
}

impl StoreRouter {
    /// Connects to both stores.
    ///
    /// The primary is connected eagerly so that startup fails when writes
    /// are impossible. The replica pool is lazy: an unreachable replica is
    /// reported but does not prevent the service from starting, and reads
    /// fail per request until it comes back. When the replica URL matches
    /// the primary URL a single pool serves both targets.
    pub async fn connect(config: &DatabaseConfig) -> CatalogResult<Self> {
        info!(
            primary = %mask_password(&config.primary_url),
            replica = %mask_password(config.effective_replica_url()),
            "Connecting to PostgreSQL stores..."
        );

        let primary = pool_options(config)
            .connect(&config.primary_url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to primary store: {}", e);
                CatalogError::Database(format!("Failed to connect to primary: {}", e))
            })?;

        let replica = if config.shares_primary() {
            info!("No dedicated replica configured, reads will use the primary pool");
            primary.clone()
        } else {
            pool_options(config)
                .connect_lazy(config.effective_replica_url())
                .map_err(|e| CatalogError::Database(format!("Invalid replica URL: {}", e)))?
        };

        let router = Self { primary, replica };

        if let Err(e) = router.check(StoreTarget::Replica).await {
            warn!("Replica store is not reachable yet: {}", e);
        }

        info!("PostgreSQL store router established");
        Ok(router)
    }

    /// Creates a router from pre-existing pools.
    #[must_use]
    pub fn with_pools(primary: PgPool, replica: PgPool) -> Self {
        Self { primary, replica }
    }

    /// Consumes the router, returning `(primary, replica)`.
    #[must_use]
    pub fn into_pools(self) -> (PgPool, PgPool) {
        (self.primary, self.replica)
    }

    fn target_pool(&self, target: StoreTarget) -> &PgPool {
        match target {
            StoreTarget::Primary => &self.primary,
            StoreTarget::Replica => &self.replica,
        }
    }

    async fn check(&self, target: StoreTarget) -> CatalogResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.target_pool(target))
            .await
            .map_err(|e| CatalogError::Database(format!("{} health check failed: {}", target, e)))?;
        Ok(())
    }
}

#[async_trait]
impl StoreRouterInterface for StoreRouter {
    fn pool(&self, target: StoreTarget) -> &PgPool {
        self.target_pool(target)
    }

    async fn health_check(&self, target: StoreTarget) -> CatalogResult<()> {
        self.check(target).await
    }

    async fn close(&self) {
        info!("Closing database connection pools...");
        self.primary.close().await;
        self.replica.close().await;
        info!("Database connection pools closed");
    }
}

impl fmt::Debug for StoreRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreRouter")
            .field("primary_size", &self.primary.size())
            .field("replica_size", &self.replica.size())
            .finish()
    }
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout())
        .idle_timeout(Some(config.idle_timeout()))
}

/// Masks the password in a database URL for logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map_or(0, |p| p + 3);
            if colon_pos > scheme_end {
                return format!("{}:****{}", &url[..colon_pos], &url[at_pos..]);
            }
        }
    }
    url.to_string()
}
