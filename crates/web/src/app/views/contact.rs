//! Contact page. The inquiry form is presentational and posts nowhere.

use leptos::*;

use greenwave_motion::{Ease, MotionError, TickerSpec, Tween, TweenVars};

use super::PageScope;

pub const INQUIRY_TYPES: [&str; 4] = [
    "General Inquiry",
    "Quote Request (Films)",
    "Sample Request (Resins)",
    "Partnership Opportunities",
];

const CONTACT_CARDS: [(&str, &str); 3] = [
    ("Our Headquarters", "456 Green Solutions Parkway, Eco City, 12345"),
    ("Call Us", "+1 (555) 123-4567 (Sales)"),
    ("Email Inquiry", "inquire@greenwave.com"),
];

const MAP_EMBED: &str =
    "https://maps.google.com/maps?q=Packaging%20Manufacturer&t=&z=13&ie=UTF8&iwloc=&output=embed";

pub fn register_motion(scope: &mut PageScope) -> Result<(), MotionError> {
    scope.add_ticker(TickerSpec::new(
        "contact-blocks",
        Tween::new(".animate-contact-block")
            .starting(TweenVars::hidden_below(30.0))
            .duration(0.8)
            .ease(Ease::Power2Out)
            .stagger(0.2)
            .delay(0.3),
    ))?;
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let options = INQUIRY_TYPES
        .iter()
        .map(|&label| view! { <option>{label}</option> })
        .collect_view();
    let cards = CONTACT_CARDS
        .iter()
        .map(|&(title, detail)| {
            view! {
                <div class="animate-contact-block contact-card">
                    <h4>{title}</h4>
                    <p>{detail}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="contact-page">
            <div class="contact-header animate-contact-block">
                <h2>"Let's Start a " <span class="accent">"Conversation"</span></h2>
                <p>"Tell us about your project needs. We ensure a swift and informed response within 24 hours."</p>
                <span class="heading-underline"></span>
            </div>
            <div class="contact-grid">
                <div class="contact-form-panel animate-contact-block">
                    <h3>"Send Us a Quick Message"</h3>
                    <form class="contact-form" onsubmit="return false;">
                        <div class="form-row">
                            <div>
                                <label for="name">"Full Name"</label>
                                <input type="text" id="name" name="name" required=true placeholder="Your Name"/>
                            </div>
                            <div>
                                <label for="email">"Email Address"</label>
                                <input type="email" id="email" name="email" required=true placeholder="your.email@company.com"/>
                            </div>
                        </div>
                        <div>
                            <label for="inquiry">"Inquiry Type"</label>
                            <select id="inquiry" name="inquiry">{options}</select>
                        </div>
                        <div>
                            <label for="message">"Your Project Details"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="5"
                                required=true
                                placeholder="Describe your packaging needs, required materials, and quantities..."
                            ></textarea>
                        </div>
                        <button type="submit" class="button">"Send Detailed Inquiry"</button>
                    </form>
                </div>
                <div class="contact-aside">
                    <div class="contact-cards">{cards}</div>
                    <div class="animate-contact-block contact-map">
                        <iframe title="Map" loading="lazy" allowfullscreen=true src=MAP_EMBED></iframe>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use greenwave_motion::{Animation, PlanRecorder, ViewScope};
    use leptos::ssr::render_to_string;

    use super::*;

    #[test]
    fn blocks_enter_on_load() {
        let mut scope = ViewScope::new(Arc::new(PlanRecorder::new()));
        register_motion(&mut scope).unwrap();

        let plan = scope.plan();
        assert!(plan.observers.is_empty());
        let Animation::Tween(tween) = &plan.tickers[0].animation else {
            panic!("contact blocks animate a single tween");
        };
        assert!((tween.total_duration(5) - 1.9).abs() < 1e-4);
    }

    #[test]
    fn form_lists_every_inquiry_type() {
        let html = render_to_string(|| view! { <ContactPage/> }).to_string();
        for label in ["General Inquiry", "Partnership Opportunities", "Send Detailed Inquiry"] {
            assert!(html.contains(label), "{label}");
        }
        assert!(html.contains("inquire@greenwave.com"));
    }
}
