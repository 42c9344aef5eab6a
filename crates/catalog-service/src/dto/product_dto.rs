//! Product DTOs.

use catalog_core::{Product, ProductId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = 500)]
    pub price_cents: i64,
}

/// Request to replace a product's fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(example = "Widget2")]
    pub name: String,
    #[schema(example = 600)]
    pub price_cents: i64,
}

/// Product response DTO. Also the cached representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: ProductId,
    pub name: String,
    pub price_cents: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price_cents: product.price_cents,
        }
    }
}
