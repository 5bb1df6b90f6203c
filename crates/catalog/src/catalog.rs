//! Read-only views over the product catalog.

use std::collections::HashSet;

use greenwave_core::{CatalogError, CatalogResult};

use crate::data::PRODUCTS;
use crate::product::{Category, Product, ProductSummary};

/// Read-only accessor over an ordered, immutable product list.
///
/// `Catalog` is `Copy`; handing it to each request is free and every view it
/// produces reflects declaration order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Catalog {
    /// Catalog backed by an arbitrary static product list.
    pub const fn new(products: &'static [Product]) -> Self {
        Self { products }
    }

    /// The catalog compiled into this binary.
    pub fn builtin() -> Self {
        Self::new(&PRODUCTS)
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Exact, case-sensitive lookup. No normalization is applied to `id`.
    pub fn find_by_id(&self, id: &str) -> CatalogResult<&'static Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(CatalogError::NotFound)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_ok()
    }

    /// Listing projection of every product, in declaration order.
    pub fn list_summaries(&self) -> Vec<ProductSummary> {
        self.products.iter().map(Product::summary).collect()
    }

    /// The first `count` summaries (home page teaser).
    pub fn featured(&self, count: usize) -> Vec<ProductSummary> {
        self.products.iter().take(count).map(Product::summary).collect()
    }

    /// Distinct categories with their product counts, in first-seen order.
    pub fn categories(&self) -> Vec<(Category, usize)> {
        let mut counts: Vec<(Category, usize)> = Vec::new();
        for product in self.products {
            match counts.iter_mut().find(|(category, _)| *category == product.category) {
                Some((_, count)) => *count += 1,
                None => counts.push((product.category, 1)),
            }
        }
        counts
    }

    /// Check the catalog invariants: valid slugs, unique ids, non-empty galleries.
    ///
    /// Returns the first violation found in declaration order.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::with_capacity(self.products.len());
        for product in self.products {
            if !product.id.is_valid() {
                return Err(CatalogError::invalid_id(product.id.to_string()));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::duplicate_id(product.id.to_string()));
            }
            if product.detail_images.is_empty() {
                return Err(CatalogError::empty_gallery(product.id.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PRODUCT_COUNT;
    use crate::product::TechnicalSpec;
    use greenwave_core::ProductId;
    use proptest::prelude::*;

    const SPECS: &[TechnicalSpec] = &[TechnicalSpec::new("k", "v")];

    fn product(id: &'static str, images: &'static [&'static str]) -> Product {
        Product {
            id: ProductId::from_static(id),
            title: "T",
            description: "D",
            full_description: "F",
            category: Category::Films,
            image: "/assets/x.jpg",
            detail_images: images,
            features: &[],
            technical_specs: SPECS,
        }
    }

    fn leak(products: Vec<Product>) -> &'static [Product] {
        Box::leak(products.into_boxed_slice())
    }

    #[test]
    fn builtin_catalog_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn every_product_is_found_by_its_own_id() {
        let catalog = Catalog::builtin();
        for product in catalog.iter() {
            let found = catalog.find_by_id(product.id.as_str()).unwrap();
            assert_eq!(found, product);
        }
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        let catalog = Catalog::builtin();
        let first = catalog.find_by_id("pet-film-eco").unwrap().clone();
        let second = catalog.find_by_id("pet-film-eco").unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find_by_id("nonexistent-id"), Err(CatalogError::NotFound));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn lookup_is_case_sensitive_and_unnormalized() {
        let catalog = Catalog::builtin();
        assert!(catalog.find_by_id("LD-FILMS-PRO").is_err());
        assert!(catalog.find_by_id(" ld-films-pro").is_err());
        assert!(catalog.find_by_id("ld-films-pro/").is_err());
    }

    #[test]
    fn summaries_match_catalog_length_and_order() {
        let catalog = Catalog::builtin();
        let summaries = catalog.list_summaries();
        assert_eq!(summaries.len(), PRODUCT_COUNT);
        assert_eq!(summaries.len(), 15);
        assert_eq!(summaries[0].id, "ld-films-pro");

        let summary_ids: Vec<_> = summaries.iter().map(|s| s.id.as_str()).collect();
        let catalog_ids: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(summary_ids, catalog_ids);
    }

    #[test]
    fn summary_ids_appear_exactly_once() {
        let summaries = Catalog::builtin().list_summaries();
        let unique: HashSet<_> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(unique.len(), summaries.len());
    }

    #[test]
    fn every_gallery_has_a_default_selection() {
        for product in Catalog::builtin().iter() {
            assert!(!product.detail_images.is_empty(), "{} has no images", product.id);
            assert_eq!(product.initial_image(), product.detail_images[0]);
        }
    }

    #[test]
    fn catalog_contains_ld_films_pro() {
        let product = Catalog::builtin().find_by_id("ld-films-pro").unwrap();
        assert_eq!(product.title, "LD Films Pro");
        assert_eq!(product.technical_specs.len(), 6);
        assert_eq!(product.detail_images.len(), 4);
    }

    #[test]
    fn featured_takes_a_prefix() {
        let catalog = Catalog::builtin();
        let featured = catalog.featured(6);
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[..], catalog.list_summaries()[..6]);
        assert_eq!(catalog.featured(100).len(), catalog.len());
    }

    #[test]
    fn categories_are_counted_in_first_seen_order() {
        let categories = Catalog::builtin().categories();
        assert_eq!(
            categories,
            vec![(Category::Films, 8), (Category::Containers, 4), (Category::Resins, 3)]
        );
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let catalog = Catalog::new(leak(vec![product("a", &["x"]), product("a", &["y"])]));
        assert_eq!(catalog.validate(), Err(CatalogError::duplicate_id("a")));
    }

    #[test]
    fn validate_rejects_empty_gallery() {
        let catalog = Catalog::new(leak(vec![product("a", &[])]));
        assert_eq!(catalog.validate(), Err(CatalogError::empty_gallery("a")));
    }

    #[test]
    fn validate_rejects_bad_slug() {
        let catalog = Catalog::new(leak(vec![product("Not A Slug", &["x"])]));
        assert!(matches!(catalog.validate(), Err(CatalogError::InvalidId(_))));
    }

    #[test]
    fn empty_catalog_is_valid_and_finds_nothing() {
        let catalog = Catalog::new(&[]);
        assert!(catalog.is_empty());
        catalog.validate().unwrap();
        assert!(catalog.list_summaries().is_empty());
        assert_eq!(catalog.find_by_id("ld-films-pro"), Err(CatalogError::NotFound));
    }

    proptest! {
        /// Property: lookups of strings that are not catalog ids never succeed.
        #[test]
        fn arbitrary_ids_miss_unless_in_catalog(id in "\\PC{0,40}") {
            let catalog = Catalog::builtin();
            let expected = catalog.iter().any(|p| p.id == id.as_str());
            prop_assert_eq!(catalog.find_by_id(&id).is_ok(), expected);
        }
    }
}
