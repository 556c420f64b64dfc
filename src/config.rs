//! Configuration support for component construction.
//!
//! The caller supplies YAML text (typically a section of its own config
//! file); this module parses and validates it.

use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

use crate::sbom_generation::policies::IdentifierPolicy;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Component construction settings.
#[derive(Debug, Deserialize, Default)]
pub struct ComponentConfig {
    pub include_license_text: Option<bool>,
    pub identifier_policy: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ComponentConfig {
    /// Parse and validate configuration from YAML text.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ComponentConfig =
            serde_yaml_ng::from_str(content).map_err(|e| SbomError::ConfigParseError {
                details: e.to_string(),
            })?;

        config.validate()?;
        config.warn_unknown_fields();

        Ok(config)
    }

    /// Whether license text is attached to resolved licenses (default: true).
    pub fn include_license_text(&self) -> bool {
        self.include_license_text.unwrap_or(true)
    }

    /// The configured identifier policy, falling back to permissive.
    pub fn identifier_policy(&self) -> Result<IdentifierPolicy> {
        match self.identifier_policy.as_deref() {
            None => Ok(IdentifierPolicy::default()),
            Some(value) => IdentifierPolicy::from_str(value.trim())
                .map_err(|details| SbomError::ConfigParseError { details }.into()),
        }
    }

    fn validate(&self) -> Result<()> {
        self.identifier_policy()?;
        Ok(())
    }

    fn warn_unknown_fields(&self) {
        for key in self.unknown_fields.keys() {
            tracing::warn!(field = %key, "Unknown config field will be ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_valid_config() {
        let yaml = r#"
include_license_text: false
identifier_policy: strict
"#;
        let config = ComponentConfig::from_yaml_str(yaml).unwrap();

        assert!(!config.include_license_text());
        assert_eq!(config.identifier_policy().unwrap(), IdentifierPolicy::Strict);
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_policy_case_insensitive() {
        let config = ComponentConfig::from_yaml_str("identifier_policy: Permissive").unwrap();
        assert_eq!(
            config.identifier_policy().unwrap(),
            IdentifierPolicy::Permissive
        );
    }

    #[test]
    fn test_invalid_policy_is_config_error() {
        let result = ComponentConfig::from_yaml_str("identifier_policy: lenient");
        assert!(result.is_err());

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::ConfigParseError { .. })
        ));
        assert!(err.to_string().contains("lenient"));
    }

    #[test]
    fn test_parse_error() {
        let result = ComponentConfig::from_yaml_str("include_license_text: [not, a, bool");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SbomError>(),
            Some(SbomError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let result = ComponentConfig::from_yaml_str("include_license_text: maybe");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_captured() {
        let yaml = r#"
include_license_text: true
unknown_field: true
another_unknown: value
"#;
        let config = ComponentConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_default_config() {
        let config = ComponentConfig::from_yaml_str("").unwrap();

        assert!(config.include_license_text());
        assert_eq!(
            config.identifier_policy().unwrap(),
            IdentifierPolicy::Permissive
        );
        assert!(config.unknown_fields.is_empty());
    }
}
