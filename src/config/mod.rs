//! Configuration management for yamlconv
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use yamlconv::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! let rules = config.legacy_rules().expect("Invalid rule patterns");
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `YAMLCONV__<section>__<key>`
//!
//! Examples:
//! - `YAMLCONV__RULES__IDLE_TIMEOUT=^\d+(s|m)$`
//! - `YAMLCONV__LOGGING__FILTER=yamlconv=debug`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/yamlconv.toml`.
//! This can be overridden using the `YAMLCONV_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, LoggingConfig, RulesConfig};
pub use validation::ValidationError;
pub(crate) use validation::compile_pattern;

use crate::rules::AppInfoRules;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or a rule
    /// pattern does not compile.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Compile the configured legacy rule patterns
    pub fn legacy_rules(&self) -> Result<AppInfoRules, ConfigError> {
        Ok(AppInfoRules::from_config(&self.rules)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{LegacyRules, Pattern};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[logging]\nfilter = \"warn\"\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_validation_catches_bad_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[rules]
idle_timeout = "[unclosed"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_legacy_rules_integration() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[rules]
idle_timeout = '^\d+m$'
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        let rules = config.legacy_rules().unwrap();

        assert!(rules.matches(Pattern::IdleTimeout, "5m"));
        assert!(!rules.matches(Pattern::IdleTimeout, "30s"));
        assert!(rules.matches(Pattern::PendingLatency, "200ms"));
    }
}
