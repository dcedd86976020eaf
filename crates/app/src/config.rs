use shared_types::{validate_catalog, AppConfig, PlanDescriptor, PLANS};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Name of the config file, relative to the workspace root.
const CONFIG_PATH: &str = "config.toml";

/// Embedded at build time so web builds carry it without a filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a config document, falling back to defaults when it is invalid.
fn parse_or_default(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::info!(
                billing = %config.links.billing,
                reduced_motion = config.features.reduced_motion,
                enterprise_banner = config.features.enterprise_banner,
                "loaded {CONFIG_PATH}"
            );
            config
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} rejected ({e}), using defaults");
            AppConfig::default()
        }
    }
}

/// Parse the embedded `config.toml` once and return it.
///
/// Safe to call repeatedly; only the first call parses.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_or_default(EMBEDDED_CONFIG))
}

/// Log any catalog entry that breaks the display invariants.
///
/// Returns whether the catalog is valid. The page still renders either way.
pub fn check_catalog(plans: &[PlanDescriptor]) -> bool {
    match validate_catalog(plans) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(field_errors = ?e.field_errors, "{e}");
            false
        }
    }
}

/// Validate the built-in plan list.
pub fn check_builtin_catalog() -> bool {
    check_catalog(PLANS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::PLUS_PLAN;

    #[test]
    fn embedded_config_parses() {
        assert!(AppConfig::from_toml_str(EMBEDDED_CONFIG).is_ok());
    }

    #[test]
    fn embedded_config_targets_billing() {
        assert_eq!(app_config().links.billing, "/billing");
    }

    #[test]
    fn invalid_config_falls_back_to_defaults() {
        assert_eq!(parse_or_default("[links\nbilling ="), AppConfig::default());
        assert_eq!(
            parse_or_default("[links]\nbilling = \"\""),
            AppConfig::default()
        );
    }

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(check_builtin_catalog());
    }

    #[test]
    fn broken_catalog_is_reported() {
        let empty = PlanDescriptor {
            features: &[],
            ..PLUS_PLAN
        };
        assert!(!check_catalog(&[empty]));
    }
}
