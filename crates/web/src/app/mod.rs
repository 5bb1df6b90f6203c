//! HTTP application wiring (axum router + shared state).
//!
//! - `state.rs`: catalog, detail resolver and motion recorder shared by handlers
//! - `routes/`: handlers, one file per surface (pages, JSON API, system)
//! - `views/`: server-rendered leptos components, one file per page
//! - `dto.rs`: query and JSON response shapes
//! - `errors.rs`: consistent error responses

use std::path::Path;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use greenwave_catalog::Catalog;
use greenwave_core::CatalogError;

use crate::config::SiteConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;
pub mod views;

use state::SiteState;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Fails when the compiled catalog violates its invariants.
pub fn build_app(config: &SiteConfig) -> Result<Router, CatalogError> {
    let catalog = Catalog::builtin();
    catalog.validate()?;
    tracing::info!(products = catalog.len(), fallback = ?config.fallback, "catalog loaded");

    let state = Arc::new(SiteState::new(catalog, config.fallback.clone()));
    Ok(build_router(state, &config.asset_dir))
}

/// Router over an existing state; unmatched paths are looked up in `asset_dir`.
pub fn build_router(state: Arc<SiteState>, asset_dir: &Path) -> Router {
    let assets = ServiceBuilder::new()
        .layer(axum::middleware::from_fn(middleware::asset_cache_headers))
        .service(
            ServeDir::new(asset_dir)
                .not_found_service(routes::pages::not_found.into_service()),
        );

    routes::router()
        .fallback_service(assets)
        .layer(Extension(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::log_requests)),
        )
}
