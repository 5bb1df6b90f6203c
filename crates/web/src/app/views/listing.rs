//! `/product`: the full catalog.

use leptos::*;

use greenwave_catalog::{Category, ProductSummary};
use greenwave_motion::{
    Ease, MotionError, ObserverSpec, Position, TickerSpec, Timeline, ToggleActions, Tween,
    TweenVars,
};

use super::PageScope;
use super::components::{ProductCard, card_selector};

pub fn register_motion(scope: &mut PageScope, card_count: usize) -> Result<(), MotionError> {
    let reveal = |target: &str, delay: f32| {
        Tween::new(target)
            .starting(TweenVars::hidden_below(10.0))
            .duration(0.8)
            .delay(delay)
            .ease(Ease::Power3Out)
    };
    let hero = Timeline::new()
        .add(reveal(".listing-hero .breadcrumb", 0.1), Position::Absolute(0.0))
        .add(reveal(".listing-hero .hero-title", 0.4), Position::Absolute(0.0))
        .add(reveal(".listing-hero .hero-subtitle", 0.6), Position::Absolute(0.0))
        .add(
            Tween::new(".listing-hero .hero-buttons")
                .starting(TweenVars::default().opacity(0.0).scale(0.95))
                .duration(0.7)
                .delay(1.0)
                .ease(Ease::Power2Out),
            Position::Absolute(0.0),
        );
    scope.add_ticker(TickerSpec::new("listing-hero", hero))?;

    for index in 0..card_count {
        let selector = card_selector(index);
        let tween = Tween::new(selector.clone())
            .starting(TweenVars::hidden_below(60.0).scale(0.98))
            .duration(0.3)
            .ease(Ease::Power2Out);
        scope.observe(
            ObserverSpec::new(selector, "top bottom".parse()?, tween)
                .end("bottom top".parse()?)
                .toggle_actions(ToggleActions::PLAY_REVERSE),
        )?;
    }
    Ok(())
}

#[component]
pub fn ListingPage(
    products: Vec<ProductSummary>,
    categories: Vec<(Category, usize)>,
) -> impl IntoView {
    let count = format!("{} Solutions", products.len());
    let cards = products
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            view! {
                <ProductCard
                    product=product
                    index=index
                    action="View Technical Details"
                    show_category=true
                />
            }
        })
        .collect_view();

    view! {
        <ListingHero categories=categories/>
        <section id="products" class="product-listing">
            <h2>"Explore All " <span class="accent">{count}</span></h2>
            <p class="section-subtitle">
                "A comprehensive look at our specialized films, resins, and packaging containers."
            </p>
            <div class="product-grid">{cards}</div>
        </section>
    }
}

#[component]
fn ListingHero(categories: Vec<(Category, usize)>) -> impl IntoView {
    let counts = categories
        .into_iter()
        .map(|(category, count)| view! { <li>{format!("{count} {category}")}</li> })
        .collect_view();

    view! {
        <section class="listing-hero">
            <div class="hero-background">
                <img src="/assets/packageBg.jpg" alt=""/>
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-content">
                <nav class="breadcrumb" aria-label="Breadcrumb">
                    <a href="/">"Home"</a>
                    <span class="separator">"\u{203a}"</span>
                    <span class="current">"Products"</span>
                </nav>
                <p class="eyebrow">"Greenwave"</p>
                <h1 class="hero-title">"Our Product Catalog"</h1>
                <p class="hero-subtitle">
                    "High-performance films, resins, and flexible containers designed for modern industrial and consumer use."
                </p>
                <ul class="category-counts">{counts}</ul>
                <div class="hero-buttons">
                    <a href="#products" class="button button-accent">"Explore Products"</a>
                </div>
            </div>
        </section>
    }
}
