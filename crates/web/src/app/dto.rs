use serde::{Deserialize, Serialize};

use greenwave_catalog::{Product, ProductSummary};

// -------------------------
// Query DTOs
// -------------------------

/// `/product/{id}?image=N`. Kept as text so a malformed value selects the
/// default image instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub image: Option<String>,
}

/// `/about?tab=about|terms|privacy`.
#[derive(Debug, Default, Deserialize)]
pub struct AboutQuery {
    pub tab: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<ProductSummary>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: &'static Product,
    pub link: String,
}

impl From<&'static Product> for ProductDetailResponse {
    fn from(product: &'static Product) -> Self {
        Self {
            product,
            link: product.link(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub products: usize,
    pub live_registrations: usize,
}
