use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCamera, LdCode, LdFileText, LdFlaskConical, LdMessageSquare, LdSettings, LdSparkles, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::IconKey;

const ICON_SIZE: u32 = 16;

/// Lucide glyph for a plan feature.
#[component]
pub fn FeatureIcon(icon: IconKey) -> Element {
    let glyph = match icon {
        IconKey::Sparkles => rsx! { Icon::<LdSparkles> { icon: LdSparkles, width: ICON_SIZE, height: ICON_SIZE } },
        IconKey::MessageSquare => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: ICON_SIZE, height: ICON_SIZE } },
        IconKey::Camera => rsx! { Icon::<LdCamera> { icon: LdCamera, width: ICON_SIZE, height: ICON_SIZE } },
        IconKey::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: ICON_SIZE, height: ICON_SIZE } },
        IconKey::FlaskConical => rsx! { Icon::<LdFlaskConical> { icon: LdFlaskConical, width: ICON_SIZE, height: ICON_SIZE } },
        IconKey::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: ICON_SIZE, height: ICON_SIZE } },
        IconKey::Video => rsx! { Icon::<LdVideo> { icon: LdVideo, width: ICON_SIZE, height: ICON_SIZE } },
        IconKey::Code => rsx! { Icon::<LdCode> { icon: LdCode, width: ICON_SIZE, height: ICON_SIZE } },
    };

    rsx! {
        span { class: "plan-feature-icon", aria_hidden: "true", {glyph} }
    }
}
