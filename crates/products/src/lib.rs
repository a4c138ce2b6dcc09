//! Products domain module.
//!
//! This crate contains the catalog's product value type and the shared handle
//! through which stored products are edited. Pure domain logic (no IO, no storage).

pub mod handle;
pub mod product;

pub use handle::ProductHandle;
pub use product::{Product, ProductId};
