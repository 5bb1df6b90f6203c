use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::app::dto::{ProductDetailResponse, ProductListResponse};
use crate::app::errors;
use crate::app::state::SiteState;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

pub async fn list_products(Extension(state): Extension<Arc<SiteState>>) -> Json<ProductListResponse> {
    Json(ProductListResponse {
        items: state.catalog.list_summaries(),
    })
}

pub async fn get_product(
    Extension(state): Extension<Arc<SiteState>>,
    Path(id): Path<String>,
) -> Response {
    match state.catalog.find_by_id(&id) {
        Ok(product) => Json(ProductDetailResponse::from(product)).into_response(),
        Err(e) => {
            tracing::debug!(%id, "api lookup miss");
            errors::catalog_error_to_response(e)
        }
    }
}
