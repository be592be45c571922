//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod compile;
mod kit;
mod output;

pub use compile::FileCompileConfig;
pub use kit::{DEFAULT_MANIFEST, FileKitConfig};
pub use output::FileOutputConfig;

use agentkit_domain::{ProviderKind, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted range for `compile.default_temperature`
pub const TEMPERATURE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=2.0;

/// Problems found in a loaded configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("compile.default_temperature: {0} is outside 0.0..=2.0")]
    TemperatureOutOfRange(f32),

    #[error("compile.default_provider: unknown provider '{0}' (expected openai or anthropic)")]
    UnknownProvider(String),
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Compile defaults
    pub compile: FileCompileConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Kit manifest settings
    pub kit: FileKitConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Both checks only warn: provider tags are carried through to compiled
    /// tools as given, and any temperature is passed on to the runtime.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let temperature = self.compile.default_temperature;
        if !TEMPERATURE_RANGE.contains(&temperature) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                error: ConfigValidationError::TemperatureOutOfRange(temperature),
            });
        }

        if self
            .compile
            .default_provider
            .parse::<ProviderKind>()
            .is_err()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                error: ConfigValidationError::UnknownProvider(
                    self.compile.default_provider.clone(),
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentkit_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[compile]
default_temperature = 0.7
default_provider = "anthropic"

[output]
format = "full"
color = false

[kit]
manifest = "agents/kit.toml"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.compile.default_temperature, 0.7);
        assert_eq!(config.compile.default_provider, "anthropic");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(config.kit.manifest.to_string_lossy(), "agents/kit.toml");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.compile.default_temperature, 0.5);
        assert_eq!(config.compile.default_provider, "openai");
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert_eq!(config.kit.manifest.to_string_lossy(), DEFAULT_MANIFEST);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_issue() {
        let toml_str = r#"
[compile]
default_temperature = 3.5
default_provider = "azure"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert_eq!(
            issues[1].error,
            ConfigValidationError::UnknownProvider("azure".to_string())
        );
        assert!(issues[1].message().contains("azure"));
    }
}
