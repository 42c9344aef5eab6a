//! # Catalog Repository
//!
//! Data access for the catalog service:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>     (domain interface)
//! PgProductRepository                 (SQLx queries)
//!   ↓  Arc<dyn StoreRouterInterface>
//! StoreRouter ── primary pool  (INSERT / UPDATE)
//!             └─ replica pool  (SELECT)
//! ```

pub mod postgres;
pub mod router;
pub mod traits;

pub use postgres::*;
pub use router::*;
pub use traits::*;
