use std::collections::HashMap;

use crate::error::AppError;

/// Display mode selected on the pricing page toggle.
///
/// The selection only changes which toggle button is highlighted; the plan
/// catalog is the same for both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanType {
    #[default]
    Personal,
    Business,
}

/// All plan types in toggle order.
pub const ALL_PLAN_TYPES: &[PlanType] = &[PlanType::Personal, PlanType::Business];

impl PlanType {
    /// Lowercase key, used for element keys and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Personal => "personal",
            PlanType::Business => "business",
        }
    }

    /// Label shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            PlanType::Personal => "Personal",
            PlanType::Business => "Business",
        }
    }
}

/// Symbolic icon reference for a plan feature.
///
/// Resolved to a concrete glyph by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKey {
    Sparkles,
    MessageSquare,
    Camera,
    FileText,
    FlaskConical,
    Settings,
    Video,
    Code,
}

/// One line in a plan's feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanFeature {
    pub text: &'static str,
    pub icon: IconKey,
}

/// Static display content for one subscription tier.
///
/// `price` and `period` are pre-formatted strings; no amount is ever computed
/// from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDescriptor {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub slogan: &'static str,
    /// Rendered top to bottom in this order.
    pub features: &'static [PlanFeature],
    pub footer: &'static str,
    pub footer_link: Option<&'static str>,
    /// Renders the call to action as a disabled "current plan" marker.
    pub current_plan: bool,
}

impl PlanDescriptor {
    /// Lowercase identifier derived from the plan name.
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }

    /// Label for the primary call to action.
    pub fn cta_label(&self) -> String {
        format!("Get {}", self.name)
    }
}

const fn feature(text: &'static str, icon: IconKey) -> PlanFeature {
    PlanFeature { text, icon }
}

pub const PLUS_PLAN: PlanDescriptor = PlanDescriptor {
    name: "Plus",
    price: "$25",
    period: "USD / month",
    slogan: "More access to advanced intelligence",
    features: &[
        feature("GPT-grade TradeBerg reasoning with finance focus", IconKey::Sparkles),
        feature("Expanded messaging and uploads for trading insights", IconKey::MessageSquare),
        feature("Expanded and faster chart/image analysis", IconKey::Camera),
        feature("Expanded memory and context per chat", IconKey::FileText),
        feature("Deep research agent mode for markets", IconKey::FlaskConical),
        feature("Projects, tasks, custom strategies", IconKey::Settings),
    ],
    footer: "Limits apply",
    footer_link: Some("Limits apply"),
    current_plan: false,
};

pub const PRO_PLAN: PlanDescriptor = PlanDescriptor {
    name: "Pro",
    price: "$250",
    period: "USD / month",
    slogan: "Full access to institutional\u{2011}grade TradeBerg",
    features: &[
        feature("Pro\u{2011}level reasoning and execution agent", IconKey::Sparkles),
        feature("Unlimited messages, uploads and chart screenshots", IconKey::MessageSquare),
        feature("Maximum context window for complex strategies", IconKey::FileText),
        feature("Advanced deep research and agent mode", IconKey::FlaskConical),
        feature("Expanded projects, tasks and strategy workspaces", IconKey::Settings),
        feature("Priority-speed data + execution pipelines", IconKey::Video),
        feature("API access for algorithmic trading", IconKey::Code),
    ],
    footer: "Unlimited subject to fair\u{2011}use guardrails. Learn more",
    footer_link: Some("Learn more"),
    current_plan: false,
};

/// Every plan shown on the pricing page, in display order.
pub const PLANS: &[PlanDescriptor] = &[PLUS_PLAN, PRO_PLAN];

/// Check the display invariants of a plan list.
///
/// Every plan needs a name, a price and at least one feature, and names must
/// be unique. Violations are reported per plan in `field_errors`.
pub fn validate_catalog(plans: &[PlanDescriptor]) -> Result<(), AppError> {
    let mut field_errors = HashMap::new();
    let mut seen = Vec::with_capacity(plans.len());

    for (idx, plan) in plans.iter().enumerate() {
        let unnamed = plan.name.trim().is_empty();
        let key = if unnamed {
            format!("plans[{idx}]")
        } else {
            plan.name.to_string()
        };

        if unnamed {
            field_errors.insert(format!("{key}.name"), "Plan name is required".to_string());
        }
        if plan.price.trim().is_empty() {
            field_errors.insert(format!("{key}.price"), "Price is required".to_string());
        }
        if plan.features.is_empty() {
            field_errors.insert(
                format!("{key}.features"),
                "At least one feature is required".to_string(),
            );
        }
        if !unnamed && seen.contains(&plan.name) {
            field_errors.insert(format!("{key}.name"), "Duplicate plan name".to_string());
        }
        seen.push(plan.name);
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Invalid plan catalog", field_errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn plan_type_default_is_personal() {
        assert_eq!(PlanType::default(), PlanType::Personal);
    }

    #[test]
    fn plan_type_labels() {
        assert_eq!(PlanType::Personal.label(), "Personal");
        assert_eq!(PlanType::Business.label(), "Business");
        assert_eq!(ALL_PLAN_TYPES, &[PlanType::Personal, PlanType::Business]);
    }

    #[test]
    fn catalog_is_valid() {
        assert!(validate_catalog(PLANS).is_ok());
    }

    #[test]
    fn catalog_lists_plus_then_pro() {
        let names: Vec<_> = PLANS.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Plus", "Pro"]);
        assert_eq!(PLANS[0].price, "$25");
        assert_eq!(PLANS[1].price, "$250");
    }

    #[test]
    fn every_plan_has_features() {
        for plan in PLANS {
            assert!(!plan.features.is_empty(), "{} has no features", plan.name);
        }
    }

    #[test]
    fn plus_features_keep_declaration_order() {
        let texts: Vec<_> = PLUS_PLAN.features.iter().map(|f| f.text).collect();
        assert_eq!(
            texts,
            vec![
                "GPT-grade TradeBerg reasoning with finance focus",
                "Expanded messaging and uploads for trading insights",
                "Expanded and faster chart/image analysis",
                "Expanded memory and context per chat",
                "Deep research agent mode for markets",
                "Projects, tasks, custom strategies",
            ]
        );
    }

    #[test]
    fn pro_has_seven_features_ending_with_api_access() {
        assert_eq!(PRO_PLAN.features.len(), 7);
        let last = PRO_PLAN.features.last().unwrap();
        assert_eq!(last.text, "API access for algorithmic trading");
        assert_eq!(last.icon, IconKey::Code);
    }

    #[test]
    fn footer_links_match_catalog_data() {
        assert_eq!(PLUS_PLAN.footer_link, Some("Limits apply"));
        assert_eq!(PLUS_PLAN.footer, "Limits apply");
        assert_eq!(PRO_PLAN.footer_link, Some("Learn more"));
        assert!(PRO_PLAN.footer.ends_with("Learn more"));
    }

    #[test]
    fn no_plan_is_marked_current() {
        assert!(PLANS.iter().all(|p| !p.current_plan));
    }

    #[test]
    fn slug_and_cta_label() {
        assert_eq!(PRO_PLAN.slug(), "pro");
        assert_eq!(PLUS_PLAN.cta_label(), "Get Plus");
    }

    #[test]
    fn validate_rejects_empty_features() {
        let broken = PlanDescriptor {
            features: &[],
            ..PLUS_PLAN
        };
        let err = validate_catalog(&[broken]).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("Plus.features"));
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let err = validate_catalog(&[PRO_PLAN, PRO_PLAN]).unwrap_err();
        assert_eq!(
            err.field_errors.get("Pro.name").map(String::as_str),
            Some("Duplicate plan name")
        );
    }

    #[test]
    fn validate_reports_unnamed_plan_by_index() {
        let unnamed = PlanDescriptor {
            name: "",
            price: "",
            ..PLUS_PLAN
        };
        let err = validate_catalog(&[PLUS_PLAN, unnamed]).unwrap_err();
        assert!(err.field_errors.contains_key("plans[1].name"));
        assert!(err.field_errors.contains_key("plans[1].price"));
    }

    #[test]
    fn validate_reports_blank_name_by_index() {
        let blank = PlanDescriptor {
            name: "   ",
            ..PLUS_PLAN
        };
        let err = validate_catalog(&[blank]).unwrap_err();
        let keys: Vec<_> = err.field_errors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["plans[0].name"]);
    }

    #[test]
    fn blank_names_are_not_reported_as_duplicates() {
        let blank = PlanDescriptor {
            name: " ",
            ..PLUS_PLAN
        };
        let err = validate_catalog(&[blank, blank]).unwrap_err();
        assert_eq!(
            err.field_errors.get("plans[1].name").map(String::as_str),
            Some("Plan name is required")
        );
    }
}
