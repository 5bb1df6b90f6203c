//! Product detail view and its not-found state.

use leptos::*;

use greenwave_catalog::Product;
use greenwave_motion::{Ease, MotionError, ObserverSpec, ToggleActions, Tween, TweenVars};

use super::PageScope;

/// Content blocks beside the gallery, each revealed by its own observer.
pub const DETAIL_BLOCKS: usize = 4;

pub const NOT_FOUND_TEXT: &str = "Product Not Found!";

/// Selected gallery image. Chosen with `?image=N` and owned by one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryState {
    pub selected: usize,
}

impl GalleryState {
    /// Malformed or out-of-range values select the first image.
    pub fn from_query(value: Option<&str>, len: usize) -> Self {
        let selected = value
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|i| *i < len)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Image shown in the main frame.
    pub fn main_image(&self, product: &Product) -> &'static str {
        product
            .detail_images
            .get(self.selected)
            .copied()
            .unwrap_or_else(|| product.initial_image())
    }
}

pub fn block_selector(index: usize) -> String {
    format!("[data-detail-block=\"{index}\"]")
}

/// Every content block rises in as it enters and reverses on the way out.
pub fn register_motion(scope: &mut PageScope) -> Result<(), MotionError> {
    for index in 0..DETAIL_BLOCKS {
        let selector = block_selector(index);
        let tween = Tween::new(selector.clone())
            .starting(TweenVars::hidden_below(40.0).scale(0.96))
            .duration(0.9)
            .ease(Ease::Power3Out);
        scope.observe(
            ObserverSpec::new(selector, "top 85%".parse()?, tween)
                .toggle_actions(ToggleActions::PLAY_REVERSE),
        )?;
    }
    Ok(())
}

#[component]
pub fn DetailPage(product: &'static Product, gallery: GalleryState) -> impl IntoView {
    let link = product.link();
    let thumbnails = product
        .detail_images
        .iter()
        .enumerate()
        .map(|(index, &src)| {
            let selected = gallery.is_selected(index);
            let class = if selected { "thumbnail selected" } else { "thumbnail" };
            let current = selected.then_some("true");
            let href = format!("{link}?image={index}");
            let label = format!("Show image {}", index + 1);
            view! {
                <a href=href class=class aria-current=current aria-label=label>
                    <img src=src alt=""/>
                </a>
            }
        })
        .collect_view();

    let main_image = gallery.main_image(product);
    let features = product
        .features
        .iter()
        .map(|&feature| view! { <li>{feature}</li> })
        .collect_view();
    let specs = product
        .technical_specs
        .iter()
        .map(|spec| {
            view! {
                <tr>
                    <th scope="row">{spec.key}</th>
                    <td>{spec.value}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="product-detail">
            <div class="detail-header">
                <nav class="breadcrumb" aria-label="Breadcrumb">
                    <a href="/">"Home"</a>
                    <span class="separator">"\u{203a}"</span>
                    <a href="/product">"Products"</a>
                    <span class="separator">"\u{203a}"</span>
                    <span class="current">{product.title}</span>
                </nav>
                <h1>{product.title}</h1>
            </div>
            <div class="detail-grid">
                <div class="detail-gallery">
                    <div class="thumbnails">{thumbnails}</div>
                    <figure class="main-image" data-zoom="hover">
                        <img id="detail-main-image" src=main_image alt=product.title/>
                        <figcaption class="zoom-hint">"Hover to Zoom"</figcaption>
                    </figure>
                </div>
                <div class="detail-content">
                    <div class="animate-detail-content" data-detail-block="0">
                        <p class="full-description">{product.full_description}</p>
                    </div>
                    <div class="animate-detail-content" data-detail-block="1">
                        <h3>"Key Features"</h3>
                        <ul class="features">{features}</ul>
                    </div>
                    <div class="animate-detail-content" data-detail-block="2">
                        <h3>"Inquire About This Product"</h3>
                        <a href="/contact" class="button button-accent">"Request Sample or Quote"</a>
                    </div>
                    <div class="animate-detail-content" data-detail-block="3">
                        <h3>"Technical Specifications"</h3>
                        <table class="spec-table">
                            <tbody>{specs}</tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div class="not-found">{NOT_FOUND_TEXT}</div> }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use greenwave_catalog::Catalog;
    use greenwave_motion::{PlanRecorder, ViewScope};
    use leptos::ssr::render_to_string;

    use super::*;

    fn product(id: &str) -> &'static Product {
        Catalog::builtin().find_by_id(id).unwrap()
    }

    #[test]
    fn gallery_defaults_to_the_first_image() {
        assert_eq!(GalleryState::from_query(None, 3).selected, 0);
        assert_eq!(GalleryState::from_query(Some("2"), 3).selected, 2);
        assert_eq!(GalleryState::from_query(Some("3"), 3).selected, 0);
        assert_eq!(GalleryState::from_query(Some("-1"), 3).selected, 0);
        assert_eq!(GalleryState::from_query(Some("two"), 3).selected, 0);
        assert_eq!(GalleryState::from_query(Some("0"), 0).selected, 0);
    }

    #[test]
    fn main_image_follows_selection() {
        let p = product("ld-films-pro");
        assert_eq!(GalleryState::default().main_image(p), p.initial_image());
        let last = p.detail_images.len() - 1;
        let gallery = GalleryState::from_query(Some(&last.to_string()), p.detail_images.len());
        assert_eq!(gallery.main_image(p), p.detail_images[last]);
    }

    #[test]
    fn one_observer_per_content_block() {
        let mut scope = ViewScope::new(Arc::new(PlanRecorder::new()));
        register_motion(&mut scope).unwrap();
        let triggers: Vec<_> = scope.plan().observers.iter().map(|o| o.trigger.clone()).collect();
        assert_eq!(triggers.len(), DETAIL_BLOCKS);
        assert_eq!(triggers[3], "[data-detail-block=\"3\"]");
    }

    #[test]
    fn renders_specs_in_insertion_order() {
        let p = product("plastic-resin-pp");
        let html = render_to_string(move || {
            let gallery = GalleryState::default();
            view! { <DetailPage product=p gallery=gallery/> }
        })
        .to_string();

        let table = &html[html.find("Technical Specifications").unwrap()..];
        let positions: Vec<_> = p
            .technical_specs
            .iter()
            .map(|spec| table.find(spec.key).unwrap())
            .collect();
        assert_eq!(positions.len(), 2);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("href=\"/contact\""));
    }

    #[test]
    fn not_found_renders_only_the_message() {
        let html = render_to_string(|| view! { <NotFoundPage/> }).to_string();
        assert!(html.contains(NOT_FOUND_TEXT));
        assert!(!html.contains("Technical Specifications"));
    }
}
