//! Tabbed company page: story, terms and privacy.

use leptos::*;

use greenwave_motion::{Ease, MotionError, ObserverSpec, Tween, TweenVars};

use super::PageScope;

/// Which section of the about page is shown. Selected with `?tab=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    About,
    Terms,
    Privacy,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::About, AboutTab::Terms, AboutTab::Privacy];

    /// Unknown or missing values select [`AboutTab::About`].
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("terms") => AboutTab::Terms,
            Some(v) if v.eq_ignore_ascii_case("privacy") => AboutTab::Privacy,
            _ => AboutTab::About,
        }
    }

    pub const fn slug(&self) -> &'static str {
        match self {
            AboutTab::About => "about",
            AboutTab::Terms => "terms",
            AboutTab::Privacy => "privacy",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AboutTab::About => "About Us",
            AboutTab::Terms => "Terms & Conditions",
            AboutTab::Privacy => "Privacy Policy",
        }
    }

    pub const fn heading(&self) -> &'static str {
        match self {
            AboutTab::About => "Our Story & Values",
            AboutTab::Terms => "Terms & Conditions",
            AboutTab::Privacy => "Privacy Policy",
        }
    }

    pub const fn subtitle(&self) -> &'static str {
        match self {
            AboutTab::About => "Committed to sustainable innovation since 2005.",
            AboutTab::Terms => "Governing principles for using Greenwave Packaging services.",
            AboutTab::Privacy => "How we handle and protect your data.",
        }
    }

    pub fn href(&self) -> String {
        format!("/about?tab={}", self.slug())
    }
}

/// Story blocks fade up once, the first time the content scrolls into view.
/// Only the about tab animates.
pub fn register_motion(scope: &mut PageScope, tab: AboutTab) -> Result<(), MotionError> {
    if tab != AboutTab::About {
        return Ok(());
    }
    scope.observe(ObserverSpec::new(
        ".about-content-wrapper",
        "top 85%".parse()?,
        Tween::new(".animate-about-block")
            .starting(TweenVars::hidden_below(30.0))
            .duration(0.9)
            .ease(Ease::Power2Out)
            .stagger(0.2),
    ))?;
    Ok(())
}

const TERMS: [(&str, &str); 4] = [
    (
        "1. Agreement to Terms",
        "By accessing or using the services provided by Greenwave Packaging Ltd. (\"Company,\" \"we,\" \"us,\" or \"our\"), you agree to be bound by these Terms and Conditions (\"Terms\"). If you disagree with any part of the terms, you may not access the service. These Terms apply to all visitors, users, and others who access or use the Service.",
    ),
    (
        "2. Products and Services",
        "All products listed on this site, including LD films, BOPP films, and plastic resins, are subject to availability. We reserve the right to limit the quantities of any products or services that we offer. All descriptions of products or product pricing are subject to change at any time without notice, at our sole discretion.",
    ),
    (
        "3. Orders, Quotes, and Payment",
        "All quote requests placed through the site are subject to acceptance by us. Pricing is based on material costs and market fluctuations and is valid only for the duration specified in the official quotation document. Title and risk of loss for all products pass to you upon our delivery to the carrier.",
    ),
    (
        "4. Limitation of Liability",
        "In no case shall Greenwave Packaging Ltd., our directors, officers, employees, affiliates, agents, contractors, interns, suppliers, service providers or licensors be liable for any injury, loss, claim, or any direct, indirect, incidental, punitive, special, or consequential damages of any kind.",
    ),
];

const PRIVACY: [(&str, &str); 4] = [
    (
        "1. Information We Collect",
        "We collect personal information that you voluntarily provide to us when registering on the site, expressing an interest in obtaining information about us or our products and services, or otherwise contacting us. The personal information we collect may include your name, email address, phone number, job title, and company name.",
    ),
    (
        "2. How We Use Your Information",
        "We use the information we collect or receive: to send you marketing and promotional communications; to send administrative information; to fulfill and manage your orders, quotes, and other transactions; and to enforce our terms, conditions, and policies. We do not sell or rent your personal information to third parties.",
    ),
    (
        "3. Security of Your Information",
        "We use administrative, technical, and physical security measures to help protect your personal information. While we have taken reasonable steps to secure the personal information you provide to us, please be aware that no security measures are perfect or impenetrable, and no method of data transmission can be guaranteed against any interception or other type of misuse.",
    ),
    (
        "4. Data Retention",
        "We will retain your personal information only for as long as is necessary for the purposes set out in this privacy policy. We will retain and use your information to the extent necessary to comply with our legal obligations (for example, if we are required to retain your data to comply with applicable laws).",
    ),
];

const PRINCIPLES: [(&str, &str); 3] = [
    (
        "Sustainability First:",
        "Every product innovation starts with minimizing waste and maximizing recycled or renewable content.",
    ),
    (
        "Quality Commitment:",
        "We maintain ISO 9001 standards across all manufacturing processes, guaranteeing consistent product quality.",
    ),
    (
        "Customer Partnership:",
        "We view our clients not just as customers, but as partners in building a greener supply chain.",
    ),
];

#[component]
pub fn AboutPage(tab: AboutTab) -> impl IntoView {
    let tabs = AboutTab::ALL
        .iter()
        .map(|t| {
            let class = if *t == tab { "tab-button active" } else { "tab-button" };
            let selected = if *t == tab { "true" } else { "false" };
            let href = t.href();
            view! {
                <a href=href class=class role="tab" aria-selected=selected>
                    <span>{t.label()}</span>
                </a>
            }
        })
        .collect_view();

    let content = match tab {
        AboutTab::About => view! { <AboutUsContent/> }.into_view(),
        AboutTab::Terms => view! { <Sections sections=&TERMS/> }.into_view(),
        AboutTab::Privacy => view! { <Sections sections=&PRIVACY/> }.into_view(),
    };

    let slug = tab.slug();

    view! {
        <div class="about-page">
            <div class="about-banner">
                <h1>{tab.heading()}</h1>
                <p>{tab.subtitle()}</p>
            </div>
            <div class="about-body">
                <div class="tab-bar" role="tablist">{tabs}</div>
                <div class="tab-content" data-tab=slug>{content}</div>
            </div>
        </div>
    }
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! { <h2 class="section-title">{title}</h2> }
}

#[component]
fn Sections(sections: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let blocks = sections
        .iter()
        .map(|&(title, body)| {
            view! {
                <SectionTitle title=title/>
                <p>{body}</p>
            }
        })
        .collect_view();
    view! { <div class="legal-sections">{blocks}</div> }
}

#[component]
fn AboutUsContent() -> impl IntoView {
    let principles = PRINCIPLES
        .iter()
        .map(|&(name, text)| {
            view! {
                <li>
                    <strong>{name}</strong>
                    " "
                    {text}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="about-content-wrapper">
            <div class="about-story">
                <div class="animate-about-block">
                    <img src="/assets/Team.jpeg" alt="Greenwave Packaging team working on sustainable solutions"/>
                </div>
                <div class="about-story-text">
                    <div class="animate-about-block">
                        <SectionTitle title="Our Mission"/>
                        <p>
                            "At Greenwave Packaging, our mission is simple: to lead the packaging industry into a sustainable future. We are dedicated to providing innovative, high-performance films, resins, and containers that meet the rigorous demands of global commerce while significantly reducing environmental impact. We believe profit and planet can, and must, coexist."
                        </p>
                    </div>
                    <div class="animate-about-block">
                        <SectionTitle title="From Inception to Innovation"/>
                        <p>
                            "Founded in 2005, Greenwave began as a small distributor specializing in recycled plastics. Over the past two decades, we have evolved into a vertically integrated manufacturer, developing proprietary five-layer co-extrusion technologies for superior film performance."
                        </p>
                    </div>
                </div>
            </div>
            <div class="animate-about-block">
                <SectionTitle title="Our Core Principles"/>
                <ul class="principles">{principles}</ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use greenwave_motion::{PlanRecorder, ToggleActions, ViewScope};
    use leptos::ssr::render_to_string;

    use super::*;

    #[test]
    fn unknown_tabs_fall_back_to_about() {
        assert_eq!(AboutTab::from_query(None), AboutTab::About);
        assert_eq!(AboutTab::from_query(Some("careers")), AboutTab::About);
        assert_eq!(AboutTab::from_query(Some("")), AboutTab::About);
        assert_eq!(AboutTab::from_query(Some("terms")), AboutTab::Terms);
        assert_eq!(AboutTab::from_query(Some(" Privacy ")), AboutTab::Privacy);
    }

    #[test]
    fn every_tab_links_to_itself() {
        for tab in AboutTab::ALL {
            let href = tab.href();
            let slug = href.strip_prefix("/about?tab=").unwrap();
            assert_eq!(AboutTab::from_query(Some(slug)), tab);
        }
    }

    #[test]
    fn only_the_story_tab_animates_and_plays_once() {
        let mut scope = ViewScope::new(Arc::new(PlanRecorder::new()));
        register_motion(&mut scope, AboutTab::Terms).unwrap();
        assert!(scope.plan().is_empty());

        register_motion(&mut scope, AboutTab::About).unwrap();
        let observer = &scope.plan().observers[0];
        assert_eq!(observer.trigger, ".about-content-wrapper");
        assert_eq!(observer.toggle_actions, ToggleActions::PLAY_ONCE);
    }

    #[test]
    fn renders_selected_tab_content() {
        let html = render_to_string(|| view! { <AboutPage tab=AboutTab::Privacy/> }).to_string();
        assert!(html.contains("How we handle and protect your data."));
        assert!(html.contains("4. Data Retention"));
        assert!(!html.contains("Our Core Principles"));
    }
}
