//! PostgreSQL product repository implementation.

use crate::{traits::ProductRepository, StoreRouterInterface};
use async_trait::async_trait;
use catalog_core::{CatalogResult, Product, ProductId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL product repository.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct PgProductRepository {
    #[shaku(inject)]
    router: Arc<dyn StoreRouterInterface>,
}

impl PgProductRepository {
    /// Creates a new PostgreSQL product repository.
    #[must_use]
    pub fn new(router: Arc<dyn StoreRouterInterface>) -> Self {
        Self { router }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price_cents: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(ProductId(row.id), row.name, row.price_cents)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn insert(&self, name: &str, price_cents: i64) -> CatalogResult<Product> {
        debug!("Inserting product on primary: {}", name);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price_cents)
            VALUES ($1, $2)
            RETURNING id::BIGINT AS id, name, price_cents::BIGINT AS price_cents
            "#,
        )
        .bind(name)
        .bind(price_cents)
        .fetch_one(self.router.primary())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: ProductId, name: &str, price_cents: i64) -> CatalogResult<Option<Product>> {
        debug!("Updating product on primary: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $1, price_cents = $2
            WHERE id = $3
            RETURNING id::BIGINT AS id, name, price_cents::BIGINT AS price_cents
            "#,
        )
        .bind(name)
        .bind(price_cents)
        .bind(id.into_inner())
        .fetch_optional(self.router.primary())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product on replica: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id::BIGINT AS id, name, price_cents::BIGINT AS price_cents
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.router.replica())
        .await?;

        Ok(row.map(Product::from))
    }
}

impl std::fmt::Debug for PgProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgProductRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_into_product() {
        let row = ProductRow {
            id: 3,
            name: "Widget".to_string(),
            price_cents: 500,
        };
        let product = Product::from(row);
        assert_eq!(product, Product::new(ProductId(3), "Widget", 500));
    }
}
