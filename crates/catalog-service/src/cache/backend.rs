//! Raw cache backend trait.

use async_trait::async_trait;
use catalog_core::CatalogResult;
use std::time::Duration;

/// Raw cache store operations.
///
/// Every method may fail with `CatalogError::Cache`. Callers outside the
/// cache module never see these errors: they go through
/// [`CacheClient`](super::CacheClient).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Round-trips to the store to check the connection.
    async fn ping(&self) -> CatalogResult<()>;

    /// Gets a value. `None` if absent or expired.
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>>;

    /// Stores a value with an expiry.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> CatalogResult<()>;

    /// Removes a value. Returns `true` if the key existed.
    async fn delete_raw(&self, key: &str) -> CatalogResult<bool>;

    /// Short backend name used in logs.
    fn name(&self) -> &'static str;
}
