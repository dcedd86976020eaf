use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Feature flags controlling optional parts of the pricing page.
///
/// Missing fields fall back to the values the page ships with, so an empty
/// `config.toml` renders the full page with entrance animations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Skip entrance animations.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Show the "See TradeBerg Enterprise" banner below the plan grid.
    #[serde(default = "default_true")]
    pub enterprise_banner: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            enterprise_banner: true,
        }
    }
}

/// Link targets owned by external collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingLinks {
    /// Destination of every plan's call to action.
    #[serde(default = "default_billing")]
    pub billing: String,
    /// Destination of the fine-print link under each plan.
    #[serde(default = "default_placeholder")]
    pub footer: String,
    /// Destination of the enterprise banner link.
    #[serde(default = "default_placeholder")]
    pub enterprise: String,
}

impl Default for PricingLinks {
    fn default() -> Self {
        Self {
            billing: default_billing(),
            footer: default_placeholder(),
            enterprise: default_placeholder(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub links: PricingLinks,
}

impl AppConfig {
    /// Parse a `config.toml` document.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.links.billing.trim().is_empty() {
            return Err(AppError::invalid_config("links.billing must not be empty"));
        }
        Ok(config)
    }
}

/// Route handled by the external billing flow.
pub const BILLING_PATH: &str = "/billing";

fn default_billing() -> String {
    BILLING_PATH.to_string()
}

fn default_placeholder() -> String {
    "#".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;

    #[test]
    fn default_config_points_at_billing() {
        let config = AppConfig::default();
        assert_eq!(config.links.billing, "/billing");
        assert_eq!(config.links.footer, "#");
        assert_eq!(config.links.enterprise, "#");
        assert!(!config.features.reduced_motion);
        assert!(config.features.enterprise_banner);
    }

    #[test]
    fn empty_toml_matches_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            [features]
            reduced_motion = true
            "#,
        )
        .unwrap();
        assert!(config.features.reduced_motion);
        assert!(config.features.enterprise_banner);
        assert_eq!(config.links, PricingLinks::default());
    }

    #[test]
    fn full_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [features]
            reduced_motion = false
            enterprise_banner = false

            [links]
            billing = "/account/billing"
            footer = "/limits"
            enterprise = "/enterprise"
            "#,
        )
        .unwrap();
        assert!(!config.features.enterprise_banner);
        assert_eq!(config.links.billing, "/account/billing");
        assert_eq!(config.links.footer, "/limits");
        assert_eq!(config.links.enterprise, "/enterprise");
    }

    #[test]
    fn blank_billing_link_is_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [links]
            billing = "  "
            "#,
        )
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidConfig);
    }

    #[test]
    fn malformed_toml_is_invalid_config() {
        let err = AppConfig::from_toml_str("[features\nreduced_motion = ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidConfig);
    }

    #[test]
    fn wrong_type_is_invalid_config() {
        let err = AppConfig::from_toml_str("[features]\nreduced_motion = \"yes\"").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidConfig);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
