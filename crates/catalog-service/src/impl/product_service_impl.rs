//! Product service implementation.

use crate::cache::{cache_keys, CacheClient, PRODUCT_TTL};
use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::metrics::ReadMetrics;
use crate::product_service::ProductService;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, ProductId};
use catalog_repository::ProductRepository;
use futures::FutureExt;
use shaku::Component;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What a replica lookup does with the row it finds.
enum OnFound<'a> {
    /// Write the row to the cache under this key before returning it.
    Populate(&'a str),
    /// Return the row as is.
    Return,
}

/// Product service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceImpl {
    #[shaku(inject)]
    repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheClient>,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    pub fn new(repository: Arc<dyn ProductRepository>, cache: Arc<dyn CacheClient>) -> Self {
        Self { repository, cache }
    }

    /// Reads the product from the replica and applies `on_found` to the row.
    async fn lookup_replica(
        &self,
        id: ProductId,
        on_found: OnFound<'_>,
    ) -> CatalogResult<ProductResponse> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        let response = ProductResponse::from(product);

        if let OnFound::Populate(key) = on_found {
            let json = serde_json::to_string(&response)?;
            self.cache.set(key, &json, PRODUCT_TTL).await;
        }

        Ok(response)
    }

    /// Second replica read after an unexpected failure. Never touches the cache.
    async fn fallback_read(&self, id: ProductId) -> CatalogResult<ProductResponse> {
        let result = self.lookup_replica(id, OnFound::Return).await;
        match &result {
            Ok(_) => {
                info!("Fallback read recovered product: {}", id);
                ReadMetrics::fallback("found");
            }
            Err(e) if e.is_not_found() => ReadMetrics::fallback("not_found"),
            Err(e) => {
                warn!("Fallback read failed for product {}: {}", id, e);
                ReadMetrics::fallback("failed");
            }
        }
        result
    }

    /// Returns the cached product, if any. Unreadable values and a panicking
    /// cache client count as a miss.
    async fn cached(&self, key: &str) -> Option<ProductResponse> {
        let raw = match AssertUnwindSafe(self.cache.get(key)).catch_unwind().await {
            Ok(raw) => raw?,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!(key = %key, "Cache get panicked, treating as a miss: {}", message);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(key = %key, "Ignoring unreadable cache entry: {}", e);
                None
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn create_product(&self, request: CreateProductRequest) -> CatalogResult<ProductResponse> {
        debug!("Creating product: {}", request.name);

        let product = self
            .repository
            .insert(&request.name, request.price_cents)
            .await?;

        info!("Product created: {}", product.id);
        Ok(ProductResponse::from(product))
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse> {
        debug!("Getting product: {}", id);

        let key = cache_keys::product_by_id(id);

        if let Some(cached) = self.cached(&key).await {
            return Ok(cached);
        }

        let first_attempt = AssertUnwindSafe(self.lookup_replica(id, OnFound::Populate(&key)))
            .catch_unwind()
            .await;

        match first_attempt {
            Ok(Ok(product)) => Ok(product),
            Ok(Err(e)) if e.is_not_found() => Err(e),
            Ok(Err(e)) => {
                warn!("Read path failed for product {}, retrying on replica: {}", id, e);
                self.fallback_read(id).await
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!("Read path panicked for product {}, retrying on replica: {}", id, message);
                self.fallback_read(id).await
            }
        }
    }

    async fn update_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> CatalogResult<ProductResponse> {
        debug!("Updating product: {}", id);

        let product = self
            .repository
            .update(id, &request.name, request.price_cents)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        let key = cache_keys::product_by_id(id);
        if let Err(payload) = AssertUnwindSafe(self.cache.delete(&key)).catch_unwind().await {
            let message = panic_message(payload.as_ref());
            warn!(key = %key, "Cache delete panicked after update: {}", message);
        }

        info!("Product updated: {}", id);
        Ok(ProductResponse::from(product))
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
