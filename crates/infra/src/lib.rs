//! Infrastructure layer: storage adapters for the catalog.

pub mod repository;

pub use repository::{InMemoryRepository, Repository, ShopRepository};
