use dioxus::prelude::*;

/// Length of an entrance animation unless a caller overrides it.
pub const REVEAL_DURATION_MS: u32 = 500;

/// Entrance motion played once when a [`Reveal`] mounts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RevealVariant {
    /// Fade in while rising 20px.
    #[default]
    FadeUp,
    Fade,
}

impl RevealVariant {
    fn as_str(&self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "fade-up",
            RevealVariant::Fade => "fade",
        }
    }
}

/// Start delay for the item at `index` of a staggered list.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

fn timing_style(duration_ms: u32, delay_ms: u32) -> String {
    format!("animation-duration: {duration_ms}ms; animation-delay: {delay_ms}ms;")
}

#[derive(Props, Clone, PartialEq)]
pub struct RevealProps {
    #[props(default)]
    pub variant: RevealVariant,
    #[props(default = REVEAL_DURATION_MS)]
    pub duration_ms: u32,
    #[props(default = 0)]
    pub delay_ms: u32,
    /// When false the children render in their final state with no motion.
    #[props(default = true)]
    pub enabled: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Animate-on-mount wrapper.
///
/// The motion is pure CSS keyframes driven by data attributes, so nothing in
/// the view waits on it and there is no completion callback.
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "reveal", None, false),
        Attribute::new("data-variant", props.variant.as_str(), None, false),
        Attribute::new(
            "data-animate",
            if props.enabled { "true" } else { "false" },
            None,
            false,
        ),
    ];
    if props.enabled {
        base.push(Attribute::new(
            "style",
            timing_style(props.duration_ms, props.delay_ms),
            None,
            false,
        ));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {props.children}
        }
    }
}
