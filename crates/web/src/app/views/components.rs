use leptos::*;

use greenwave_catalog::ProductSummary;

/// Centered section heading with the accent underline.
#[component]
pub fn Heading(#[prop(into)] heading: String) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2 class="about-heading">{heading}</h2>
            <span class="about-underline"></span>
        </div>
    }
}

pub const PAGE_NOT_FOUND_TEXT: &str = "Page Not Found";

/// Body for paths that match no page and no asset.
#[component]
pub fn PageNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>{PAGE_NOT_FOUND_TEXT}</h1>
            <a href="/" class="btn btn-primary">"Back to Home"</a>
        </div>
    }
}

#[component]
pub fn SubHeading(#[prop(into)] title: String) -> impl IntoView {
    view! { <h3 class="sub-heading">{title}</h3> }
}

/// Listing card for one product. `index` is the card's position in its grid
/// and keys the card's scroll observer (`[data-card="N"]`).
#[component]
pub fn ProductCard(
    product: ProductSummary,
    index: usize,
    #[prop(default = "View Full Details")] action: &'static str,
    #[prop(default = false)] show_category: bool,
) -> impl IntoView {
    let category = show_category.then(|| {
        view! { <span class="product-category">{product.category.as_str()}</span> }
    });

    let key = index.to_string();

    view! {
        <article class="product-card-item" data-card=key>
            <div class="product-card-image">
                <img src=product.image alt=product.title loading="lazy"/>
            </div>
            <div class="product-card-body">
                {category}
                <h3>{product.title}</h3>
                <p>{product.description}</p>
                <a href=product.link class="button">{action}</a>
            </div>
        </article>
    }
}

/// Selector of the card rendered with `index`.
pub fn card_selector(index: usize) -> String {
    format!("[data-card=\"{index}\"]")
}

#[cfg(test)]
mod tests {
    use leptos::ssr::render_to_string;

    use greenwave_catalog::Catalog;

    use super::*;

    #[test]
    fn page_not_found_links_home() {
        let html = render_to_string(|| view! { <PageNotFound/> }).to_string();
        assert!(html.contains(PAGE_NOT_FOUND_TEXT));
        assert!(html.contains("href=\"/\""));
        assert!(!html.contains("Product Not Found!"));
    }

    #[test]
    fn card_links_to_detail_view() {
        let product = Catalog::builtin().list_summaries().remove(1);
        let html = render_to_string(move || {
            view! { <ProductCard product=product index=1 show_category=true/> }
        })
        .to_string();
        assert!(html.contains("href=\"/product/pet-film-eco\""));
        assert!(html.contains("data-card=\"1\""));
        assert!(html.contains("View Full Details"));
        assert!(html.contains("product-category"));
    }

    #[test]
    fn card_selector_matches_rendered_attribute() {
        assert_eq!(card_selector(4), "[data-card=\"4\"]");
    }
}
