//! Product service trait definition.

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, ProductId};

/// Product service trait.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Creates a product on the primary store. Does not touch the cache.
    async fn create_product(&self, request: CreateProductRequest) -> CatalogResult<ProductResponse>;

    /// Fetches a product, serving from the cache when possible.
    ///
    /// On a miss the replica is read and the cache populated. If anything
    /// after the miss fails unexpectedly, the replica is read once more
    /// without touching the cache.
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse>;

    /// Updates a product on the primary store, then invalidates its cache entry.
    async fn update_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> CatalogResult<ProductResponse>;
}
