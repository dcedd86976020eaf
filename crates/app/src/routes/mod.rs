pub mod not_found;
pub mod pricing;

use dioxus::prelude::*;

use not_found::NotFound;
use pricing::PricingPage;

/// Application routes.
///
/// `/billing` is deliberately absent: plan calls to action leave the router
/// and land on the external billing flow.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[redirect("/", || Route::PricingPage {})]
    #[route("/pricing")]
    PricingPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
