use dioxus::prelude::*;

mod components;
mod config;
mod routes;

use routes::Route;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Parse config.toml and check the catalog once, after the logger is up.
    let app_config = use_hook(|| {
        config::check_builtin_catalog();
        config::app_config().clone()
    });
    use_context_provider(|| app_config);

    rsx! {
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
