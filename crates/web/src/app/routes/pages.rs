use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use leptos::view;

use greenwave_catalog::Resolution;
use greenwave_catalog::resolve::DETAIL_PREFIX;

use crate::app::dto::{AboutQuery, DetailQuery};
use crate::app::errors::RenderError;
use crate::app::state::SiteState;
use crate::app::views::about::AboutPage;
use crate::app::views::components::PageNotFound;
use crate::app::views::contact::ContactPage;
use crate::app::views::detail::{DetailPage, NotFoundPage};
use crate::app::views::home::HomePage;
use crate::app::views::listing::ListingPage;
use crate::app::views::{self, AboutTab, GalleryState, PageMeta};

pub async fn home(Extension(state): Extension<Arc<SiteState>>) -> Result<Html<String>, RenderError> {
    let mut scope = state.motion_scope();
    let products = state.catalog.featured(views::home::FEATURED_COUNT);
    views::home::register_motion(&mut scope, products.len())?;

    let html = views::render_document(&mut scope, PageMeta::new("", "/"), state.catalog, move || {
        view! { <HomePage products=products/> }
    })?;
    Ok(Html(html))
}

pub async fn about(
    Extension(state): Extension<Arc<SiteState>>,
    Query(query): Query<AboutQuery>,
) -> Result<Html<String>, RenderError> {
    let tab = AboutTab::from_query(query.tab.as_deref());
    let mut scope = state.motion_scope();
    views::about::register_motion(&mut scope, tab)?;

    let meta = PageMeta::new(tab.heading(), "/about");
    let html = views::render_document(&mut scope, meta, state.catalog, move || {
        view! { <AboutPage tab=tab/> }
    })?;
    Ok(Html(html))
}

pub async fn contact(Extension(state): Extension<Arc<SiteState>>) -> Result<Html<String>, RenderError> {
    let mut scope = state.motion_scope();
    views::contact::register_motion(&mut scope)?;

    let meta = PageMeta::new("Contact", "/contact");
    let html = views::render_document(&mut scope, meta, state.catalog, || view! { <ContactPage/> })?;
    Ok(Html(html))
}

pub async fn listing(Extension(state): Extension<Arc<SiteState>>) -> Result<Html<String>, RenderError> {
    let mut scope = state.motion_scope();
    let products = state.catalog.list_summaries();
    let categories = state.catalog.categories();
    views::listing::register_motion(&mut scope, products.len())?;

    let meta = PageMeta::new("Products", "/product");
    let html = views::render_document(&mut scope, meta, state.catalog, move || {
        view! { <ListingPage products=products categories=categories/> }
    })?;
    Ok(Html(html))
}

/// `/product/`, `/product/{id}` and `/product/{id}/`. The product comes from
/// the last path segment; an unknown id renders the not-found state with a 404.
pub async fn detail(
    Extension(state): Extension<Arc<SiteState>>,
    uri: Uri,
    Query(query): Query<DetailQuery>,
) -> Result<Response, RenderError> {
    let path = uri.path().to_string();
    let resolution = state.resolver.resolve_path(&path);

    let Some(product) = resolution.product() else {
        tracing::debug!(%path, "no product for detail path");
        return product_not_found(&state, &path).map(IntoResponse::into_response);
    };
    if let Resolution::Fallback(_) = resolution {
        tracing::debug!(%path, product = %product.id, "detail path has no id; showing default product");
    }

    let gallery = GalleryState::from_query(query.image.as_deref(), product.detail_images.len());
    let mut scope = state.motion_scope();
    views::detail::register_motion(&mut scope)?;

    let meta = PageMeta::new(product.title, path);
    let html = views::render_document(&mut scope, meta, state.catalog, move || {
        view! { <DetailPage product=product gallery=gallery/> }
    })?;
    Ok(Html(html).into_response())
}

/// Fallback for paths that match neither a route nor a static file.
///
/// Misses under `/product/` keep the product not-found text; anything else
/// gets the generic page.
pub async fn not_found(
    Extension(state): Extension<Arc<SiteState>>,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), RenderError> {
    let path = uri.path();
    if path.starts_with(DETAIL_PREFIX) {
        return product_not_found(&state, path);
    }

    let mut scope = state.motion_scope();
    let meta = PageMeta::new("Page Not Found", path);
    let html = views::render_document(&mut scope, meta, state.catalog, || view! { <PageNotFound/> })?;
    Ok((StatusCode::NOT_FOUND, Html(html)))
}

fn product_not_found(state: &SiteState, path: &str) -> Result<(StatusCode, Html<String>), RenderError> {
    let mut scope = state.motion_scope();
    let meta = PageMeta::new("Not Found", path);
    let html = views::render_document(&mut scope, meta, state.catalog, || view! { <NotFoundPage/> })?;
    Ok((StatusCode::NOT_FOUND, Html(html)))
}
