use dioxus::prelude::*;
use shared_types::{PlanType, ALL_PLAN_TYPES};
use shared_ui::components::{Button, ButtonVariant};

/// Set the pricing page's plan type.
///
/// Selecting the value that is already active is a no-op, so repeated clicks
/// on the same button never trigger a re-render.
pub fn select_plan_type(mut plan_type: Signal<PlanType>, value: PlanType) {
    if *plan_type.peek() == value {
        return;
    }
    tracing::debug!(plan_type = value.as_str(), "plan type selected");
    plan_type.set(value);
}

/// Button style for `option` given the current selection.
fn toggle_variant(option: PlanType, selected: PlanType) -> ButtonVariant {
    if option == selected {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Ghost
    }
}

/// Pill-shaped "Personal" / "Business" switch.
///
/// Only the highlighted button changes; the plans shown below it are the same
/// for both options.
///
/// ```rust,ignore
/// let plan_type = use_signal(PlanType::default);
/// rsx! {
///     PlanTypeToggle { plan_type: plan_type }
/// }
/// ```
#[component]
pub fn PlanTypeToggle(plan_type: Signal<PlanType>) -> Element {
    let selected = *plan_type.read();

    rsx! {
        div { class: "plan-type-toggle", role: "group", aria_label: "Plan type",
            for option in ALL_PLAN_TYPES.iter().copied() {
                Button {
                    key: "{option:?}",
                    variant: toggle_variant(option, selected),
                    aria_pressed: if option == selected { "true" } else { "false" },
                    onclick: move |_| select_plan_type(plan_type, option),
                    {option.label()}
                }
            }
        }
    }
}
