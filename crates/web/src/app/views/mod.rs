//! Server-rendered pages.
//!
//! Each page module exposes a leptos component for its body and a
//! `register_motion` function that records the page's animations on the
//! request's [`ViewScope`]. [`render_document`] wraps a body in the shared
//! layout and embeds the scope's motion plan.

use std::sync::Arc;

use leptos::ssr::render_to_string;
use leptos::*;

use greenwave_catalog::Catalog;
use greenwave_motion::{PlanRecorder, ViewScope};

use crate::app::errors::RenderError;
use layout::{Footer, NavBar};

pub mod about;
pub mod components;
pub mod contact;
pub mod detail;
pub mod home;
pub mod layout;
pub mod listing;

pub use about::AboutTab;
pub use detail::GalleryState;

/// Registration scope used by every page render.
pub type PageScope = ViewScope<Arc<PlanRecorder>>;

pub const SITE_NAME: &str = "Greenwave Packaging";

/// Document-level metadata for one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    /// Request path, used to mark the active nav link.
    pub path: String,
    pub description: &'static str,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            description: "Sustainable films, resins and flexible containers from Greenwave Packaging.",
        }
    }

    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            SITE_NAME.to_string()
        } else {
            format!("{} | {SITE_NAME}", self.title)
        }
    }
}

/// Full HTML document: head, nav bar, `body`, footer and the motion plan.
///
/// Registers the footer animation on `scope` before serializing the plan, so
/// the plan holds every registration the page made.
pub fn render_document<F, N>(
    scope: &mut PageScope,
    meta: PageMeta,
    catalog: Catalog,
    body: F,
) -> Result<String, RenderError>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    layout::register_footer_motion(scope)?;
    let plan = scope.plan().to_script_json()?;

    let title = meta.document_title();
    let description = meta.description;
    let head = render_to_string(move || {
        view! {
            <meta charset="utf-8"/>
            <meta name="viewport" content="width=device-width, initial-scale=1"/>
            <title>{title}</title>
            <meta name="description" content=description/>
            <link rel="icon" href="/favicon.ico"/>
            <link rel="stylesheet" href="/assets/css/site.css"/>
        }
    });

    let path = meta.path;
    let footer_products = catalog.featured(layout::FOOTER_PRODUCT_COUNT);
    let year = layout::copyright_year();
    let page = render_to_string(move || {
        let content = body().into_view();
        view! {
            <NavBar path=path/>
            <main id="main-content">{content}</main>
            <Footer year=year products=footer_products/>
        }
    });

    Ok(format!(
        "<!DOCTYPE html><html lang=\"en\"><head>{head}</head><body>{page}\
         <script type=\"application/json\" id=\"motion-plan\">{plan}</script>\
         <script src=\"/assets/js/motion.js\" defer></script></body></html>"
    ))
}
