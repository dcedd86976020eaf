use dioxus::prelude::*;
use shared_types::{AppConfig, PlanType, PLANS};
use shared_ui::theme::ThemeToken;
use shared_ui::{Reveal, RevealVariant};

use crate::components::{PlanCard, PlanTypeToggle};

/// The heading settles just after its header block starts moving.
const TITLE_DELAY_MS: u32 = 100;

/// The enterprise banner fades in after both cards.
const ENTERPRISE_DELAY_MS: u32 = 400;

/// "Upgrade your plan" page.
///
/// Owns the plan type toggle state, which resets to Personal on every mount.
#[component]
pub fn PricingPage() -> Element {
    let plan_type = use_signal(PlanType::default);

    use_hook(|| tracing::debug!(plans = PLANS.len(), "pricing page mounted"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pricing.css") }
        PricingBody { plan_type: plan_type }
    }
}

/// Heading, plan type toggle, one card per catalog plan and the enterprise
/// banner.
///
/// Reads [`AppConfig`] from context and falls back to defaults when none is
/// provided. `plan_type` only drives the toggle highlight.
#[component]
pub fn PricingBody(plan_type: Signal<PlanType>) -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let animate = !config.features.reduced_motion;
    let dot_style = format!("background: {};", ThemeToken::TextMuted.var());

    rsx! {
        div { class: "pricing-page",
            div { class: "pricing-container",
                Reveal { class: "pricing-header", enabled: animate,
                    Reveal {
                        class: "pricing-title-reveal",
                        variant: RevealVariant::Fade,
                        delay_ms: TITLE_DELAY_MS,
                        enabled: animate,
                        h1 { class: "pricing-title", "Upgrade your plan" }
                    }
                    PlanTypeToggle { plan_type: plan_type }
                }

                div { class: "pricing-grid",
                    for (index, plan) in PLANS.iter().enumerate() {
                        PlanCard {
                            key: "{plan.name}",
                            plan: *plan,
                            index: index,
                            links: config.links.clone(),
                            animate: animate,
                        }
                    }
                }

                if config.features.enterprise_banner {
                    Reveal {
                        class: "pricing-enterprise",
                        variant: RevealVariant::Fade,
                        delay_ms: ENTERPRISE_DELAY_MS,
                        enabled: animate,
                        span {
                            class: "pricing-enterprise-dot",
                            style: "{dot_style}",
                        }
                        span {
                            "Need more capabilities for your business? "
                            a { class: "pricing-enterprise-link", href: "{config.links.enterprise}",
                                "See TradeBerg Enterprise"
                            }
                        }
                    }
                }
            }
        }
    }
}
