use axum::{Router, routing::get};

pub mod api;
pub mod pages;
pub mod system;

/// Every dynamic route; static files are attached by the caller.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
        .route("/product", get(pages::listing))
        .route("/product/", get(pages::detail))
        .route("/product/:id", get(pages::detail))
        .route("/product/:id/", get(pages::detail))
        .nest("/api", api::router())
}
