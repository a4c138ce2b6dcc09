//! `shop-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod search;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use search::Searchable;
