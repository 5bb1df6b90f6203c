use serde::Serialize;

use greenwave_core::{Entity, ProductId, ValueObject};

/// Display grouping for products. Not used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Films,
    Containers,
    Resins,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Films => "Films",
            Category::Containers => "Containers",
            Category::Resins => "Resins",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a product's technical specification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TechnicalSpec {
    pub key: &'static str,
    pub value: &'static str,
}

impl TechnicalSpec {
    pub const fn new(key: &'static str, value: &'static str) -> Self {
        Self { key, value }
    }
}

impl ValueObject for TechnicalSpec {}

/// A catalog entry: one sellable film, container or resin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub category: Category,
    /// Representative illustration, relative to the static asset root.
    pub image: &'static str,
    /// Gallery for the detail view; the first entry is selected by default.
    pub detail_images: &'static [&'static str],
    pub features: &'static [&'static str],
    /// Display order is insertion order; keys are not required to be unique.
    pub technical_specs: &'static [TechnicalSpec],
}

impl Product {
    /// Navigable path of the product's detail view.
    pub fn link(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// Image the detail view selects before any user interaction.
    pub fn initial_image(&self) -> &'static str {
        self.detail_images.first().copied().unwrap_or(self.image)
    }

    /// Listing projection (drops the long-form fields).
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id.clone(),
            title: self.title,
            description: self.description,
            category: self.category,
            image: self.image,
            link: self.link(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Reduced-field view of a [`Product`] used by listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECS: &[TechnicalSpec] = &[
        TechnicalSpec::new("Material Base", "Polypropylene (PP)"),
        TechnicalSpec::new("Material Base", "Duplicate keys are allowed"),
    ];

    fn sample() -> Product {
        Product {
            id: ProductId::from_static("sample-resin"),
            title: "Sample Resin",
            description: "Short",
            full_description: "Long",
            category: Category::Resins,
            image: "/assets/products/Sample.jpg",
            detail_images: &["/assets/products/SampleA.jpg", "/assets/products/SampleB.jpg"],
            features: &["One"],
            technical_specs: SPECS,
        }
    }

    #[test]
    fn link_is_derived_from_id() {
        assert_eq!(sample().link(), "/product/sample-resin");
    }

    #[test]
    fn initial_image_is_first_gallery_entry() {
        assert_eq!(sample().initial_image(), "/assets/products/SampleA.jpg");
    }

    #[test]
    fn initial_image_falls_back_to_card_image_when_gallery_is_empty() {
        let product = Product { detail_images: &[], ..sample() };
        assert_eq!(product.initial_image(), "/assets/products/Sample.jpg");
    }

    #[test]
    fn summary_keeps_listing_fields_only() {
        let product = sample();
        let summary = product.summary();
        assert_eq!(summary.id, product.id);
        assert_eq!(summary.title, "Sample Resin");
        assert_eq!(summary.category, Category::Resins);
        assert_eq!(summary.link, "/product/sample-resin");

        let json = serde_json::to_value(&summary).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 6);
        assert!(json.get("features").is_none());
        assert!(json.get("full_description").is_none());
    }

    #[test]
    fn spec_rows_keep_insertion_order_and_duplicates() {
        let product = sample();
        let keys: Vec<_> = product.technical_specs.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["Material Base", "Material Base"]);
    }

    #[test]
    fn category_serializes_as_display_label() {
        assert_eq!(serde_json::to_string(&Category::Containers).unwrap(), "\"Containers\"");
        assert_eq!(Category::Films.to_string(), "Films");
    }
}
