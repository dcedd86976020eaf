use dioxus::prelude::*;

/// Visual variant for buttons and button-styled links.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    /// Solid light fill, used for calls to action and the active toggle option.
    #[default]
    Primary,
    Outline,
    /// No fill until hovered, used for inactive toggle options.
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

fn base_attributes(variant: ButtonVariant, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let merged = base_attributes(props.variant, props.attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonLinkProps {
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Anchor styled as a button. Navigation is left to the browser, so the
/// target may live outside this application's router.
#[component]
pub fn ButtonLink(props: ButtonLinkProps) -> Element {
    let merged = base_attributes(props.variant, props.attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        a {
            href: "{props.href}",
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_defaults_to_primary() {
        let html = dioxus_ssr::render_element(rsx! { Button { "Personal" } });
        assert!(html.contains("data-style=\"primary\""), "{html}");
        assert!(html.contains(">Personal</button>"), "{html}");
    }

    #[test]
    fn ghost_variant_sets_data_style() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Ghost, "Business" }
        });
        assert!(html.contains("data-style=\"ghost\""), "{html}");
    }

    #[test]
    fn button_link_renders_anchor_with_href() {
        let html = dioxus_ssr::render_element(rsx! {
            ButtonLink { href: "/billing", "Get Pro" }
        });
        assert!(html.contains("<a"), "{html}");
        assert!(html.contains("href=\"/billing\""), "{html}");
        assert!(html.contains(">Get Pro</a>"), "{html}");
    }
}
