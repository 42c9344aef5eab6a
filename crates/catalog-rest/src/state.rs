//! Application state for Axum handlers.

use catalog_repository::StoreRouterInterface;
use catalog_service::{CacheClient, ProductService};
use shaku::HasComponent;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub store_router: Arc<dyn StoreRouterInterface>,
    pub cache: Arc<dyn CacheClient>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        store_router: Arc<dyn StoreRouterInterface>,
        cache: Arc<dyn CacheClient>,
    ) -> Self {
        Self {
            product_service,
            store_router,
            cache,
        }
    }

    /// Resolves every handle from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: HasComponent<dyn ProductService>
            + HasComponent<dyn StoreRouterInterface>
            + HasComponent<dyn CacheClient>,
    {
        Self {
            product_service: module.resolve(),
            store_router: module.resolve(),
            cache: module.resolve(),
        }
    }
}
