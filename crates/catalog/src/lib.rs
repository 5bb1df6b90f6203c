//! Product catalog for the Greenwave Packaging site.
//!
//! The catalog is compiled into the binary and never mutated. This crate
//! provides the records themselves, read-only views over them, and the rule
//! for turning a navigated path into the product a detail view should show.
//! No IO, no HTTP, no rendering.

pub mod catalog;
pub mod data;
pub mod product;
pub mod resolve;

pub use catalog::Catalog;
pub use product::{Category, Product, ProductSummary, TechnicalSpec};
pub use resolve::{FallbackPolicy, Resolution, DEFAULT_PRODUCT_ID};
