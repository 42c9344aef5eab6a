//! Dependency injection module using Shaku.
//!
//! `CatalogModule` holds one instance of every long-lived handle: the store
//! router with its two pools, the product repository, the cache client and
//! the product service. Handlers resolve them as `Arc<dyn Trait>`.

use catalog_config::{CacheBackendKind, CacheConfig};
use catalog_core::{module, CatalogResult, HasComponent};
use catalog_repository::{PgProductRepository, ProductRepository, StoreRouter, StoreRouterInterface, StoreRouterParameters};
use catalog_service::{
    CacheBackend, CacheClient, MemoryCacheBackend, ProductService, ProductServiceImpl,
    RedisCacheBackend, ResilientCache, ResilientCacheParameters,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

module! {
    pub CatalogModule {
        components = [
            StoreRouter,
            PgProductRepository,
            ResilientCache,
            ProductServiceImpl,
        ],
        providers = [],
    }
}

/// Creates the cache backend selected by configuration.
///
/// Returns `None` when caching is disabled; the cache client then never
/// becomes ready and every read goes to the replica.
pub fn build_cache_backend(config: &CacheConfig) -> CatalogResult<Option<Arc<dyn CacheBackend>>> {
    if !config.enabled {
        info!("Cache disabled, all reads go to the replica");
        return Ok(None);
    }

    let backend: Arc<dyn CacheBackend> = match config.backend {
        CacheBackendKind::Redis => Arc::new(RedisCacheBackend::from_config(config)?),
        CacheBackendKind::Memory => Arc::new(MemoryCacheBackend::new()),
    };

    info!("Cache backend: {}", config.backend);
    Ok(Some(backend))
}

/// Builds the module around an already connected store router.
pub fn build_module(
    store_router: StoreRouter,
    cache_backend: Option<Arc<dyn CacheBackend>>,
) -> Arc<CatalogModule> {
    let (primary, replica) = store_router.into_pools();

    let module = CatalogModule::builder()
        .with_component_parameters::<StoreRouter>(StoreRouterParameters { primary, replica })
        .with_component_parameters::<ResilientCache>(ResilientCacheParameters {
            backend: cache_backend,
            ready: AtomicBool::new(false),
        })
        .build();

    Arc::new(module)
}

/// Resolves the long-lived handles from a module.
pub trait ServiceResolver {
    /// Resolves the product service.
    fn product_service(&self) -> Arc<dyn ProductService>;

    /// Resolves the product repository.
    fn product_repository(&self) -> Arc<dyn ProductRepository>;

    /// Resolves the store router.
    fn store_router(&self) -> Arc<dyn StoreRouterInterface>;

    /// Resolves the cache client.
    fn cache(&self) -> Arc<dyn CacheClient>;
}

impl ServiceResolver for CatalogModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        self.resolve()
    }

    fn product_repository(&self) -> Arc<dyn ProductRepository> {
        self.resolve()
    }

    fn store_router(&self) -> Arc<dyn StoreRouterInterface> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheClient> {
        self.resolve()
    }
}
