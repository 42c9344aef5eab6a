//! Cache key generators for consistent key naming.

use catalog_core::ProductId;
use std::time::Duration;

/// Expiry for cached products.
pub const PRODUCT_TTL: Duration = Duration::from_secs(60);

/// Generate the cache key for a product by ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> String {
    format!("product:{}", id)
}
