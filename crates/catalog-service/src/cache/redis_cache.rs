//! Redis-based cache backend.

use super::CacheBackend;
use async_trait::async_trait;
use catalog_config::CacheConfig;
use catalog_core::{CatalogError, CatalogResult};
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use std::time::Duration;
use tracing::{debug, info};

/// Redis cache backend over a `deadpool-redis` pool.
#[derive(Clone)]
pub struct RedisCacheBackend {
    pool: Pool,
}

impl RedisCacheBackend {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Builds the pool from configuration.
    ///
    /// No connection is opened here. The first readiness probe does that,
    /// so an unreachable Redis does not prevent startup.
    pub fn from_config(config: &CacheConfig) -> CatalogResult<Self> {
        info!("Creating Redis connection pool for cache...");

        let pool = Config::from_url(&config.url)
            .builder()
            .map_err(|e| CatalogError::Configuration(format!("Invalid Redis config: {}", e)))?
            .max_size(config.pool_size as usize)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| CatalogError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self::new(pool))
    }

    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| CatalogError::cache(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    async fn ping(&self) -> CatalogResult<()> {
        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map_err(|e| CatalogError::cache(format!("PING failed: {}", e)))?;
        Ok(())
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        conn.get(key)
            .await
            .map_err(|e| CatalogError::cache(format!("Failed to get key '{}': {}", key, e)))
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()> {
        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| CatalogError::cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Stored key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete_raw(&self, key: &str) -> CatalogResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| CatalogError::cache(format!("Failed to delete key '{}': {}", key, e)))?;
        Ok(deleted > 0)
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("RedisCacheBackend")
            .field("size", &status.size)
            .field("max_size", &status.max_size)
            .finish()
    }
}
