//! Landing page.

use leptos::*;

use greenwave_catalog::ProductSummary;
use greenwave_motion::{
    Ease, MotionError, ObserverSpec, Position, TickerSpec, Timeline, ToggleActions, Tween,
    TweenVars, cards_per_row, row_of,
};

use super::PageScope;
use super::components::{Heading, ProductCard, SubHeading, card_selector};

/// Products shown in the "Our Products" grid.
pub const FEATURED_COUNT: usize = 6;

/// Layout width assumed when staggering card rows on the server.
pub const GRID_WIDTH: u32 = 1024;

const CORE_VALUES: [(&str, &str); 4] = [
    (
        "Innovation",
        "We continuously invest in research and development to bring cutting-edge packaging solutions to our clients.",
    ),
    (
        "Sustainability",
        "Environmental responsibility is at the core of our operations, driving us to develop eco-friendly packaging alternatives.",
    ),
    (
        "Customer Satisfaction",
        "We build lasting relationships by understanding our clients' needs and delivering exceptional value.",
    ),
    (
        "Quality",
        "We maintain the highest standards in all our products and processes to ensure consistent performance.",
    ),
];

pub fn register_motion(scope: &mut PageScope, card_count: usize) -> Result<(), MotionError> {
    let hero = Timeline::new()
        .then(
            Tween::new(".hero-title")
                .starting(TweenVars::hidden_below(50.0))
                .duration(1.2)
                .delay(0.2)
                .ease(Ease::Power3Out),
        )
        .add_at(
            Tween::new(".hero-subtitle")
                .starting(TweenVars::hidden_below(30.0))
                .duration(1.0)
                .ease(Ease::Power3Out),
            "-=0.8",
        )?
        .add_at(
            Tween::new(".hero-buttons")
                .starting(TweenVars::default().opacity(0.0).scale(0.8))
                .duration(0.8)
                .ease(Ease::Power3Out),
            "-=0.6",
        )?;
    scope.add_ticker(TickerSpec::new("home-hero", hero))?;

    let reveal = |target: &str, duration: f32| {
        Tween::new(target)
            .starting(TweenVars::hidden_below(50.0))
            .duration(duration)
            .ease(Ease::Power2Out)
    };
    let about = Timeline::new()
        .then(reveal(".home-about .about-heading", 0.8))
        .add_at(reveal(".home-about .about-underline", 0.6), "<0.2")?
        .add_at(reveal(".home-about .about-image", 1.0), "<0.4")?
        .add(reveal(".home-about .about-text-block", 1.0), Position::WithPrevious(0.0));
    scope.observe(
        ObserverSpec::new("section.home-about", "top 85%".parse()?, about)
            .toggle_actions(ToggleActions::PLAY_REVERSE),
    )?;

    let per_row = cards_per_row(GRID_WIDTH);
    for index in 0..card_count {
        let start = if row_of(index, per_row) == 0 { "top 100%" } else { "center bottom" };
        let selector = card_selector(index);
        let tween = Tween::new(selector.clone())
            .starting(TweenVars::hidden_below(50.0).scale(0.9))
            .duration(0.3)
            .ease(Ease::Power3Out);
        scope.observe(
            ObserverSpec::new(selector, start.parse()?, tween)
                .end("bottom center".parse()?)
                .toggle_actions(ToggleActions::PLAY_REVERSE),
        )?;
    }

    scope.observe(
        ObserverSpec::new(
            "section.core-values",
            "top bottom".parse()?,
            Tween::new(".value-card-item")
                .starting(TweenVars::hidden_below(50.0).scale(0.95))
                .duration(1.2)
                .ease(Ease::Power3Out)
                .stagger(0.1),
        )
        .end("bottom top".parse()?)
        .toggle_actions(ToggleActions::PLAY_REVERSE),
    )?;

    scope.observe(
        ObserverSpec::new(
            "section.cta-banner",
            "top 85%".parse()?,
            Tween::new(".cta-item")
                .starting(TweenVars::hidden_below(30.0))
                .duration(0.8)
                .ease(Ease::Power2Out)
                .stagger(0.15),
        )
        .end("bottom center".parse()?)
        .toggle_actions(ToggleActions::PLAY_REVERSE),
    )?;

    Ok(())
}

#[component]
pub fn HomePage(products: Vec<ProductSummary>) -> impl IntoView {
    view! {
        <Hero/>
        <AboutTeaser/>
        <OurProducts products=products/>
        <CoreValues/>
        <CtaBanner/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero home-hero">
            <video class="hero-video" autoplay=true muted=true loop=true playsinline=true aria-hidden="true">
                <source src="/bg.mp4" type="video/mp4"/>
            </video>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <h1 class="hero-title">"Premium Packaging Solutions"</h1>
                <p class="hero-subtitle">
                    "Leading manufacturer of high-quality LD films and trusted importer of premium packaging materials for industries worldwide."
                </p>
                <div class="hero-buttons">
                    <a href="/product" class="button">"Explore Products"</a>
                    <a href="/contact" class="button button-outline">"Contact Us"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutTeaser() -> impl IntoView {
    view! {
        <section class="home-about">
            <Heading heading="About Greenwave Packaging"/>
            <div class="about-columns">
                <div class="about-text-block">
                    <SubHeading title="Your Trusted Sustainable Packaging Partner"/>
                    <p>
                        "Greenwave Packaging Ltd. is a leading manufacturer of high-quality LD films and a trusted importer of premium packaging solutions. With a strong commitment to innovation, sustainability, and customer satisfaction, we provide a diverse range of products tailored to meet the evolving needs of industries worldwide."
                    </p>
                    <p>
                        "Our expertise spans across various packaging materials and solutions, ensuring that we can meet the specific requirements of each client while maintaining the highest quality standards."
                    </p>
                    <p>
                        "At Greenwave, we believe that sustainable packaging is not just an option but a responsibility. We continuously work towards developing eco-friendly solutions that reduce environmental impact without compromising on performance."
                    </p>
                    <a href="/contact" class="button">"Contact Us Today"</a>
                </div>
                <div class="about-image">
                    <img src="/aboutPkgHome.jpg" alt="Various green and sustainable packaging materials" width="600" height="400"/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn OurProducts(products: Vec<ProductSummary>) -> impl IntoView {
    let cards = products
        .into_iter()
        .enumerate()
        .map(|(index, product)| view! { <ProductCard product=product index=index/> })
        .collect_view();

    view! {
        <section class="our-products">
            <Heading heading="Our Products"/>
            <p class="section-subtitle">"Explore our sustainable and high-performance packaging films."</p>
            <div class="product-grid">{cards}</div>
        </section>
    }
}

#[component]
fn CoreValues() -> impl IntoView {
    let cards = CORE_VALUES
        .iter()
        .map(|&(title, description)| {
            view! {
                <div class="value-card-item">
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="core-values">
            <Heading heading="Our Core Values"/>
            <p class="section-subtitle">
                "These principles guide every decision we make, ensuring we deliver value and responsibility in every product."
            </p>
            <div class="value-grid">{cards}</div>
        </section>
    }
}

#[component]
fn CtaBanner() -> impl IntoView {
    view! {
        <section class="cta-banner">
            <h2 class="cta-item">"Ready to Elevate Your Packaging?"</h2>
            <p class="cta-item">
                "Partner with Greenwave for innovative, sustainable, and high-performance solutions designed for your success."
            </p>
            <a href="/contact" class="button cta-item">"Get in Touch Today"</a>
        </section>
    }
}
