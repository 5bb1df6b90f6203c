//! Which product a detail view shows for a navigated path.

use greenwave_core::{CatalogError, ProductId};

use crate::catalog::Catalog;
use crate::product::Product;

/// Product shown when the detail path carries no id.
pub const DEFAULT_PRODUCT_ID: &str = "ld-films-pro";

/// Prefix of every detail path.
pub const DETAIL_PREFIX: &str = "/product/";

/// What to do when the detail path has no product segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Show this product instead.
    DefaultProduct(ProductId),
    /// Render the not-found state.
    NotFound,
}

impl FallbackPolicy {
    /// Parse a configuration value: `none` selects [`FallbackPolicy::NotFound`],
    /// anything else must be a product slug.
    pub fn from_setting(value: &str) -> Result<Self, CatalogError> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Ok(Self::NotFound);
        }
        ProductId::parse(value).map(Self::DefaultProduct)
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::DefaultProduct(ProductId::from_static(DEFAULT_PRODUCT_ID))
    }
}

/// Outcome of resolving a detail path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The path named this product.
    Requested(&'static Product),
    /// The path named nothing; the fallback policy chose this product.
    Fallback(&'static Product),
    /// Nothing to show. Rendered as the terminal not-found state.
    Unresolved,
}

impl Resolution {
    pub fn product(&self) -> Option<&'static Product> {
        match self {
            Resolution::Requested(product) | Resolution::Fallback(product) => Some(product),
            Resolution::Unresolved => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Final non-empty `/`-separated segment of `path`.
///
/// Trailing slashes are skipped. Query strings must already be stripped.
pub fn last_segment(path: &str) -> Option<&str> {
    path.rsplit('/').find(|segment| !segment.is_empty())
}

/// Product segment of a detail path: the last non-empty segment after
/// [`DETAIL_PREFIX`]. `/product/` has none; `/product/x/` names `x`.
pub fn detail_segment(path: &str) -> Option<&str> {
    last_segment(path.strip_prefix(DETAIL_PREFIX).unwrap_or(path))
}

/// Maps detail paths to products under a [`FallbackPolicy`].
#[derive(Debug, Clone)]
pub struct DetailResolver {
    catalog: Catalog,
    policy: FallbackPolicy,
}

impl DetailResolver {
    pub fn new(catalog: Catalog, policy: FallbackPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> &FallbackPolicy {
        &self.policy
    }

    /// Resolve an already-extracted segment.
    ///
    /// A present but unknown segment is never replaced by the fallback.
    pub fn resolve(&self, segment: Option<&str>) -> Resolution {
        match segment {
            Some(id) => match self.catalog.find_by_id(id) {
                Ok(product) => Resolution::Requested(product),
                Err(_) => Resolution::Unresolved,
            },
            None => match &self.policy {
                FallbackPolicy::DefaultProduct(id) => self
                    .catalog
                    .find_by_id(id.as_str())
                    .map(Resolution::Fallback)
                    .unwrap_or(Resolution::Unresolved),
                FallbackPolicy::NotFound => Resolution::Unresolved,
            },
        }
    }

    /// Resolve a full request path such as `/product/pet-film-eco`.
    pub fn resolve_path(&self, path: &str) -> Resolution {
        self.resolve(detail_segment(path))
    }
}

impl Default for DetailResolver {
    fn default() -> Self {
        Self::new(Catalog::builtin(), FallbackPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_skips_trailing_slashes() {
        assert_eq!(last_segment("/product/ld-films-pro"), Some("ld-films-pro"));
        assert_eq!(last_segment("/product/ld-films-pro/"), Some("ld-films-pro"));
        assert_eq!(last_segment("a//b//"), Some("b"));
        assert_eq!(last_segment("/"), None);
        assert_eq!(last_segment(""), None);
        assert_eq!(last_segment("bare"), Some("bare"));
    }

    #[test]
    fn detail_segment_ignores_the_product_prefix() {
        assert_eq!(detail_segment("/product/"), None);
        assert_eq!(detail_segment("/product//"), None);
        assert_eq!(detail_segment("/product/pet-film-eco"), Some("pet-film-eco"));
        assert_eq!(detail_segment("/product/pet-film-eco/"), Some("pet-film-eco"));
    }

    #[test]
    fn trailing_slash_resolves_the_named_product() {
        let resolution = DetailResolver::default().resolve_path("/product/pet-film-eco/");
        assert!(matches!(resolution, Resolution::Requested(p) if p.id == "pet-film-eco"));
    }

    #[test]
    fn known_segment_is_requested() {
        let resolver = DetailResolver::default();
        let resolution = resolver.resolve_path("/product/pet-film-eco");
        assert!(matches!(resolution, Resolution::Requested(p) if p.id == "pet-film-eco"));
        assert!(!resolution.is_fallback());
    }

    #[test]
    fn missing_segment_uses_default_product() {
        let resolution = DetailResolver::default().resolve_path("/product/");
        assert!(resolution.is_fallback());
        assert_eq!(resolution.product().unwrap().id, DEFAULT_PRODUCT_ID);
    }

    #[test]
    fn unknown_segment_is_unresolved_even_with_default_policy() {
        let resolution = DetailResolver::default().resolve_path("/product/does-not-exist");
        assert_eq!(resolution, Resolution::Unresolved);
        assert!(resolution.product().is_none());
    }

    #[test]
    fn not_found_policy_leaves_missing_segment_unresolved() {
        let resolver = DetailResolver::new(Catalog::builtin(), FallbackPolicy::NotFound);
        assert_eq!(resolver.resolve(None), Resolution::Unresolved);
        assert!(resolver.resolve(Some("ld-films-pro")).product().is_some());
    }

    #[test]
    fn default_pointing_at_missing_product_is_unresolved() {
        let policy = FallbackPolicy::DefaultProduct(ProductId::from_static("retired-line"));
        let resolver = DetailResolver::new(Catalog::builtin(), policy);
        assert_eq!(resolver.resolve(None), Resolution::Unresolved);
    }

    #[test]
    fn policy_setting_parses() {
        assert_eq!(FallbackPolicy::from_setting("none").unwrap(), FallbackPolicy::NotFound);
        assert_eq!(FallbackPolicy::from_setting(" NONE ").unwrap(), FallbackPolicy::NotFound);
        assert_eq!(
            FallbackPolicy::from_setting("pet-film-eco").unwrap(),
            FallbackPolicy::DefaultProduct(ProductId::from_static("pet-film-eco"))
        );
        assert!(FallbackPolicy::from_setting("Not Valid").is_err());
        assert_eq!(
            FallbackPolicy::default(),
            FallbackPolicy::DefaultProduct(ProductId::from_static("ld-films-pro"))
        );
    }
}
