//! Repository trait definitions.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, Product, ProductId};

/// Product repository trait.
///
/// Writes are executed against the primary store and reads against the
/// replica. Store failures surface as `CatalogError::Database`.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Inserts a product on the primary, returning the stored row.
    async fn insert(&self, name: &str, price_cents: i64) -> CatalogResult<Product>;

    /// Updates a product on the primary.
    ///
    /// Returns `None` when no row matched `id`.
    async fn update(&self, id: ProductId, name: &str, price_cents: i64) -> CatalogResult<Option<Product>>;

    /// Finds a product by ID on the replica.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}
