//! Shell configuration, provided to the component tree through context.

use serde::{Deserialize, Serialize};

use crate::domain::menu::{find_section, DEFAULT_EXPANDED_SECTION, HOME_HREF};
use crate::shared::errors::{Result, ShellError};
use crate::shared::logging::{log_config_error, log_config_loaded};

/// Config bundled with the app
pub const EMBEDDED_CONFIG: &str = include_str!("../assets/shell.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Text shown in the header brand link
    pub brand: String,
    /// Whether the panel starts open
    pub panel_open: bool,
    /// Section id expanded on mount
    pub default_expanded: String,
    /// Target of the brand link
    pub home_href: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "Franchisee Portal".to_string(),
            panel_open: true,
            default_expanded: DEFAULT_EXPANDED_SECTION.to_string(),
            home_href: HOME_HREF.to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse a JSON config; missing fields fall back to defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(raw).map_err(|e| {
            let error = ShellError::from(e);
            log_config_error(&error);
            error
        })?;
        config.validate()?;
        log_config_loaded(&config.brand, &config.default_expanded, config.panel_open);
        Ok(config)
    }

    /// Parse `raw`, falling back to the defaults when it is invalid
    pub fn from_json_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|_| {
            tracing::warn!("Falling back to default shell config");
            Self::default()
        })
    }

    /// Config the app mounts with
    pub fn load_embedded() -> Self {
        Self::from_json_or_default(EMBEDDED_CONFIG)
    }

    pub fn validate(&self) -> Result<()> {
        let result = if find_section(&self.default_expanded).is_none() {
            Err(ShellError::UnknownSection(self.default_expanded.clone()))
        } else if !self.home_href.starts_with('/') {
            Err(ShellError::InvalidHref(self.home_href.clone()))
        } else {
            Ok(())
        };

        if let Err(error) = &result {
            log_config_error(error);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.panel_open);
        assert_eq!(config.default_expanded, "dashboard");
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = ShellConfig::from_json(r#"{"panel_open": false, "default_expanded": "finance"}"#)
            .unwrap();
        assert!(!config.panel_open);
        assert_eq!(config.default_expanded, "finance");
        assert_eq!(config.brand, "Franchisee Portal");
        assert_eq!(config.home_href, "/franchisee/dashboard");
    }

    #[test]
    fn test_from_json_unknown_section() {
        let err = ShellConfig::from_json(r#"{"default_expanded": "reports"}"#).unwrap_err();
        assert!(matches!(err, ShellError::UnknownSection(ref id) if id == "reports"));
    }

    #[test]
    fn test_from_json_relative_home() {
        let err = ShellConfig::from_json(r#"{"home_href": "franchisee"}"#).unwrap_err();
        assert!(matches!(err, ShellError::InvalidHref(_)));
    }

    #[test]
    fn test_embedded_config_is_valid() {
        let config = ShellConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, ShellConfig::load_embedded());
        assert!(find_section(&config.default_expanded).is_some());
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let config = ShellConfig::from_json_or_default(r#"{"default_expanded": "reports"}"#);
        assert_eq!(config, ShellConfig::default());

        let config = ShellConfig::from_json_or_default("{ not json");
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_fallback_keeps_one_section_expanded() {
        use crate::domain::menu::FRANCHISEE_MENU;
        use crate::domain::models::ExpansionState;

        let config = ShellConfig::from_json_or_default(r#"{"default_expanded": "reports"}"#);
        let state = ExpansionState::with_default(FRANCHISEE_MENU, &config.default_expanded);
        assert_eq!(state.expanded_ids().count(), 1);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ShellConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ShellError::ConfigParse(_)));
        assert!(err.to_string().starts_with("Config parse error"));
    }
}
