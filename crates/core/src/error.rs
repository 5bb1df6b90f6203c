//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// The catalog is read-only and resident in memory, so the only runtime
/// failure is a lookup miss. The remaining variants are raised when the
/// compiled catalog is validated at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No product carries the requested identifier.
    #[error("product not found")]
    NotFound,

    /// An identifier is not a valid slug.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Two catalog entries share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// A product has no detail images to select from.
    #[error("product {0} has no detail images")]
    EmptyGallery(String),
}

impl CatalogError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn empty_gallery(id: impl Into<String>) -> Self {
        Self::EmptyGallery(id.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Stable machine-readable code, used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidId(_) => "invalid_id",
            Self::DuplicateId(_) => "duplicate_id",
            Self::EmptyGallery(_) => "empty_gallery",
        }
    }
}
