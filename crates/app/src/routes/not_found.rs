use dioxus::prelude::*;
use shared_types::{AppConfig, PLANS};

use crate::routes::Route;

/// 404 page for any path outside the router.
///
/// Points visitors at the plans instead of a dead end, since most stray
/// links into this app are old plan or checkout URLs.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing at {path}" }
                PlanSuggestions {}
                Link { to: Route::PricingPage {},
                    class: "not-found-link",
                    "Compare all plans"
                }
            }
        }
    }
}

/// Direct links to each plan card and to the billing flow.
#[component]
fn PlanSuggestions() -> Element {
    let config = try_use_context::<AppConfig>().unwrap_or_default();
    let pricing = Route::PricingPage {}.to_string();

    rsx! {
        p { class: "not-found-message", "Looking for a plan?" }
        ul { class: "not-found-plans",
            for plan in PLANS.iter() {
                li { key: "{plan.name}",
                    a { href: "{pricing}#plan-{plan.slug()}", "{plan.name}" }
                    span { class: "not-found-plan-price", " {plan.price} {plan.period}" }
                }
            }
        }
        a { class: "not-found-billing", href: "{config.links.billing}", "Manage billing" }
    }
}
