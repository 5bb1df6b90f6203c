//! Shared page chrome: navigation bar and footer.

use chrono::{Datelike, Utc};
use leptos::*;

use greenwave_catalog::ProductSummary;
use greenwave_motion::{
    MotionError, ObserverSpec, Position, Timeline, ToggleActions, Tween, TweenVars,
};

use super::PageScope;

/// Primary navigation, in display order.
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Products", "/product"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

/// Number of catalog products linked from the footer.
pub const FOOTER_PRODUCT_COUNT: usize = 7;

pub const CONTACT_EMAIL: &str = "info@greenwave.com";
pub const CONTACT_PHONE: &str = "(555) 123-4567";

/// Whether the nav link `href` is the current section for `path`.
///
/// Home matches only itself; other sections match their own path and
/// anything below it.
pub fn is_active(path: &str, href: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    match path.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn copyright_year() -> i32 {
    Utc::now().year()
}

/// Footer columns rise in together, then the bottom bar follows before they
/// finish. Plays on entry and reverses when scrolled back above.
pub fn register_footer_motion(scope: &mut PageScope) -> Result<(), MotionError> {
    let timeline = Timeline::new()
        .add(
            Tween::new(".footer-column")
                .starting(TweenVars::hidden_below(50.0))
                .duration(1.0)
                .stagger(0.15),
            Position::Absolute(0.0),
        )
        .add_at(
            Tween::new(".footer-bottom-element")
                .starting(TweenVars::hidden_below(20.0))
                .duration(0.8)
                .stagger(0.1),
            ">-0.5",
        )?;

    scope.observe(
        ObserverSpec::new("footer.site-footer", "top 90%".parse()?, timeline)
            .toggle_actions(ToggleActions::PLAY_REVERSE),
    )?;
    Ok(())
}

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <a href="/" class="logo">
            <span class="logo-mark" aria-hidden="true"></span>
            <span class="logo-text">
                <span class="logo-name">"Greenwave Packaging"</span>
                <span class="logo-tagline">"Sustainable Packaging Solutions"</span>
            </span>
        </a>
    }
}

/// Site navigation. The link for the current section carries
/// `aria-current="page"`.
#[component]
pub fn NavBar(path: String) -> impl IntoView {
    let links = move |class: &'static str| {
        NAV_LINKS
            .iter()
            .map(|&(label, href)| {
                let active = is_active(&path, href);
                let class = if active { format!("{class} active") } else { class.to_string() };
                let current = active.then_some("page");
                view! {
                    <a href=href class=class aria-current=current>
                        {label}
                        <span class="hover-line"></span>
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <nav class="navbar" aria-label="Main">
                <Logo/>
                <div class="nav-links">{links("nav-link")}</div>
                <details class="mobile-menu">
                    <summary aria-label="Toggle menu">"Menu"</summary>
                    <div class="mobile-links">{links("mobile-link-item")}</div>
                </details>
                <a href="/contact" class="nav-cta">"Get a Quote"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer(year: i32, products: Vec<ProductSummary>) -> impl IntoView {
    let quick_links = NAV_LINKS
        .iter()
        .map(|&(label, href)| view! { <li><a href=href>{label}</a></li> })
        .collect_view();
    let product_links = products
        .into_iter()
        .map(|p| view! { <li><a href=p.link>{p.title}</a></li> })
        .collect_view();
    let mailto = format!("mailto:{CONTACT_EMAIL}");
    let copyright = format!("\u{a9} {year} Greenwave Packaging. All rights reserved.");

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <Logo/>
                    <p>"Committed to a greener future with innovative and sustainable packaging solutions."</p>
                </div>
                <div class="footer-column">
                    <h3>"Quick Links"</h3>
                    <ul>{quick_links}</ul>
                </div>
                <div class="footer-column">
                    <h3>"Products"</h3>
                    <ul>{product_links}</ul>
                </div>
                <div class="footer-column">
                    <h3>"Get in Touch"</h3>
                    <ul class="footer-contact">
                        <li>"Email: "<a href=mailto>{CONTACT_EMAIL}</a></li>
                        <li>"Phone: "{CONTACT_PHONE}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p class="footer-bottom-element">{copyright}</p>
                <div class="footer-bottom-element footer-legal">
                    <a href="/about?tab=privacy">"Privacy Policy"</a>
                    <a href="/about?tab=terms">"Terms of Service"</a>
                </div>
            </div>
        </footer>
    }
}
