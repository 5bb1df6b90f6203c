//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; two with the same attributes are equal.
//! In the catalog, a technical specification row is a value object while a
//! product is an entity.
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq, Eq)]
//! struct TechnicalSpec {
//!     key: &'static str,
//!     value: &'static str,
//! }
//!
//! impl ValueObject for TechnicalSpec {}
//! ```

/// Marker trait for value objects.
///
/// Implementors must be cheap to clone and compared by their attribute values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
