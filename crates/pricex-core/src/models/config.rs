//! Configuration structures for amount extraction.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::currency::LocaleHint;
use crate::error::ConfigError;

/// Main configuration for pricex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricexConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Amount extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Locale hint used when the caller does not give one (e.g. "fr-FR").
    pub default_locale: Option<String>,

    /// Collapse interior whitespace runs during sanitization.
    pub collapse_whitespace: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_locale: None,
            collapse_whitespace: true,
        }
    }
}

impl ExtractionConfig {
    /// Parse the configured default locale.
    pub fn locale_hint(&self) -> Result<Option<LocaleHint>, ConfigError> {
        self.default_locale
            .as_deref()
            .map(|tag| {
                tag.parse::<LocaleHint>().map_err(|e| ConfigError::Validation {
                    field: "extraction.default_locale".to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,

    /// Include rows that produced no amount in batch output.
    pub include_failures: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            include_failures: true,
        }
    }
}

impl PricexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.locale_hint().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = PricexConfig::default();
        assert_eq!(config.extraction.default_locale, None);
        assert!(config.extraction.collapse_whitespace);
        assert!(config.output.pretty_json);
        assert!(config.output.include_failures);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PricexConfig =
            serde_json::from_str(r#"{"extraction": {"default_locale": "fr-FR"}}"#).unwrap();
        assert_eq!(config.extraction.default_locale.as_deref(), Some("fr-FR"));
        assert!(config.extraction.collapse_whitespace);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(
            config.extraction.locale_hint().unwrap().and_then(|h| h.currency()).map(|c| c.as_str()),
            Some("EUR")
        );
    }

    #[test]
    fn test_invalid_locale_is_rejected() {
        let mut config = PricexConfig::default();
        config.extraction.default_locale = Some("fr--FR".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = PricexConfig::default();
        config.extraction.default_locale = Some("en-CA".to_string());
        config.output.pretty_json = false;
        config.save(&path).unwrap();

        let loaded = PricexConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = PricexConfig::from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
