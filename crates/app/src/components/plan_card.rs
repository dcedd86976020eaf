use dioxus::prelude::*;
use shared_types::{PlanDescriptor, PricingLinks};
use shared_ui::{
    stagger_delay, Button, ButtonLink, ButtonVariant, Card, CardContent, CardDescription,
    CardFooter, CardHeader, CardTitle, Reveal,
};

use crate::components::FeatureIcon;

/// Delay added per card so the grid fills in left to right.
const CARD_STAGGER_MS: u32 = 100;

/// One plan in the pricing grid.
///
/// `index` is the card's position in the grid and only drives the entrance
/// delay.
#[component]
pub fn PlanCard(plan: PlanDescriptor, index: usize, links: PricingLinks, animate: bool) -> Element {
    let slug = plan.slug();

    rsx! {
        Reveal {
            class: "plan-card-reveal",
            delay_ms: stagger_delay(index, CARD_STAGGER_MS),
            enabled: animate,
            Card { class: "plan-card", id: "plan-{slug}",
                CardHeader {
                    CardTitle { "{plan.name}" }
                    div { class: "plan-price",
                        "{plan.price} "
                        span { class: "plan-period", "{plan.period}" }
                    }
                    CardDescription { "{plan.slogan}" }
                }
                CardContent {
                    ul { class: "plan-features",
                        for (idx, feature) in plan.features.iter().enumerate() {
                            li { key: "{idx}", class: "plan-feature",
                                FeatureIcon { icon: feature.icon }
                                span { class: "plan-feature-text", "{feature.text}" }
                            }
                        }
                    }
                }
                CardFooter {
                    if plan.current_plan {
                        Button {
                            class: "plan-cta",
                            variant: ButtonVariant::Outline,
                            disabled: true,
                            "Your current plan"
                        }
                    } else {
                        ButtonLink { class: "plan-cta", href: links.billing.clone(), {plan.cta_label()} }
                    }
                    p { class: "plan-footer",
                        "{plan.footer} "
                        if let Some(label) = plan.footer_link {
                            a { class: "plan-footer-link", href: "{links.footer}", "{label}" }
                        }
                    }
                }
            }
        }
    }
}
