//! # Catalog Service
//!
//! Business logic for the catalog: the product service and the
//! best-effort cache client it reads through.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod metrics;
pub mod product_service;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::*;
