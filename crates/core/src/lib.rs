//! `greenwave-core`: shared building blocks for the catalog site.
//!
//! This crate contains **pure domain** primitives (no HTTP, no rendering).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
pub use value_object::ValueObject;
