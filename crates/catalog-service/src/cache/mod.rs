//! Caching infrastructure for the service layer.
//!
//! Two layers:
//! - [`CacheBackend`] exposes the raw, fallible store operations.
//! - [`CacheClient`] is what the service talks to. Its implementation,
//!   [`ResilientCache`], checks readiness before every call and absorbs
//!   every backend failure.

mod backend;
mod cache_client;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use backend::CacheBackend;
#[cfg(test)]
pub use backend::MockCacheBackend;
pub use cache_client::{spawn_readiness_probe, CacheClient, ResilientCache, ResilientCacheParameters};
pub use cache_keys::PRODUCT_TTL;
pub use memory_cache::MemoryCacheBackend;
pub use redis_cache::RedisCacheBackend;
