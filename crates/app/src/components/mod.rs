pub mod feature_icon;
pub mod plan_card;
pub mod plan_type_toggle;

pub use feature_icon::FeatureIcon;
pub use plan_card::PlanCard;
pub use plan_type_toggle::PlanTypeToggle;
