//! Product entity.

use crate::ProductId;
use serde::{Deserialize, Serialize};

/// A product as stored in the relational store.
///
/// The store is the single source of truth. `price_cents` is kept
/// non-negative by the column constraint; the entity itself does not
/// re-check it so that whatever the store returns is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in cents.
    pub price_cents: i64,
}

impl Product {
    /// Creates a product from its stored columns.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price_cents: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price_cents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_keeps_field_names() {
        let product = Product::new(ProductId(1), "Widget", 500);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price_cents"], 500);
    }
}
