use dioxus::prelude::*;

/// Named design tokens shared by every component stylesheet.
///
/// Components reference tokens only through their CSS custom property, so a
/// token's value can change without touching any component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeToken {
    PageBg,
    CardBg,
    CardBorder,
    CardShadow,
    TextPrimary,
    TextSecondary,
    TextMuted,
    ActionBg,
    ActionFg,
    ActionHover,
}

/// All tokens in declaration order.
pub const ALL_TOKENS: &[ThemeToken] = &[
    ThemeToken::PageBg,
    ThemeToken::CardBg,
    ThemeToken::CardBorder,
    ThemeToken::CardShadow,
    ThemeToken::TextPrimary,
    ThemeToken::TextSecondary,
    ThemeToken::TextMuted,
    ThemeToken::ActionBg,
    ThemeToken::ActionFg,
    ThemeToken::ActionHover,
];

impl ThemeToken {
    /// Custom property name, without the `var()` wrapper.
    pub fn property(&self) -> &'static str {
        match self {
            ThemeToken::PageBg => "--pricing-page-bg",
            ThemeToken::CardBg => "--pricing-card-bg",
            ThemeToken::CardBorder => "--pricing-card-border",
            ThemeToken::CardShadow => "--pricing-card-shadow",
            ThemeToken::TextPrimary => "--pricing-text-primary",
            ThemeToken::TextSecondary => "--pricing-text-secondary",
            ThemeToken::TextMuted => "--pricing-text-muted",
            ThemeToken::ActionBg => "--pricing-action-bg",
            ThemeToken::ActionFg => "--pricing-action-fg",
            ThemeToken::ActionHover => "--pricing-action-hover",
        }
    }

    /// Value used by the dark theme.
    pub fn dark_value(&self) -> &'static str {
        match self {
            ThemeToken::PageBg => "#0b0b0c",
            ThemeToken::CardBg => "#141416",
            ThemeToken::CardBorder => "rgba(255, 255, 255, 0.08)",
            ThemeToken::CardShadow => "0 20px 45px rgba(0, 0, 0, 0.65)",
            ThemeToken::TextPrimary => "#f4f4f5",
            ThemeToken::TextSecondary => "#a1a1aa",
            ThemeToken::TextMuted => "#71717a",
            ThemeToken::ActionBg => "#ffffff",
            ThemeToken::ActionFg => "#000000",
            ThemeToken::ActionHover => "#e5e7eb",
        }
    }

    /// `var(--token)` reference for inline styles.
    pub fn var(&self) -> String {
        format!("var({})", self.property())
    }
}

/// Declarations for every token, suitable for a `:root` rule.
pub fn root_declarations() -> String {
    ALL_TOKENS
        .iter()
        .map(|t| format!("{}: {};", t.property(), t.dark_value()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inject the token values into the document head.
///
/// Mount once near the root of the application.
#[component]
pub fn ThemeSeed() -> Element {
    let css = format!(":root {{ {} }}", root_declarations());

    rsx! {
        document::Style { {css} }
    }
}
