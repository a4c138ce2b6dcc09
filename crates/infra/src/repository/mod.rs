//! Identifier-keyed catalog storage.
//!
//! Stores entities in insertion order and rejects duplicate identifiers.
//! Nothing is persisted.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRepository;
pub use r#trait::Repository;

use shop_products::ProductHandle;

/// The shop's product catalog. Holds handles, so callers keep editing what they stored.
pub type ShopRepository = InMemoryRepository<ProductHandle>;
