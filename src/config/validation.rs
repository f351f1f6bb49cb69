use super::models::{Config, RulesConfig};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Pattern '{field}' must not be empty")]
    EmptyPattern { field: String },

    #[error("Pattern '{field}' is not a valid regular expression: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern 'expiration_delta' must have at least 2 capture groups, found {found}")]
    MissingDeltaGroups { found: usize },

    #[error("Logging filter must not be empty")]
    EmptyLogFilter,
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_rules(&config.rules)?;
    validate_logging(config)?;
    Ok(())
}

/// Every pattern must compile; the delta token must expose amount and unit groups
fn validate_rules(rules: &RulesConfig) -> Result<(), ValidationError> {
    for (field, pattern) in [
        ("pending_latency", &rules.pending_latency),
        ("idle_timeout", &rules.idle_timeout),
        ("expiration", &rules.expiration),
    ] {
        compile_pattern(field, pattern)?;
    }

    let delta = compile_pattern("expiration_delta", &rules.expiration_delta)?;
    // captures_len counts the implicit whole-match group
    let groups = delta.captures_len() - 1;
    if groups < 2 {
        return Err(ValidationError::MissingDeltaGroups { found: groups });
    }

    Ok(())
}

fn validate_logging(config: &Config) -> Result<(), ValidationError> {
    if config.logging.filter.trim().is_empty() {
        return Err(ValidationError::EmptyLogFilter);
    }
    Ok(())
}

pub(crate) fn compile_pattern(field: &str, pattern: &str) -> Result<Regex, ValidationError> {
    if pattern.trim().is_empty() {
        return Err(ValidationError::EmptyPattern {
            field: field.to_string(),
        });
    }

    Regex::new(pattern).map_err(|source| ValidationError::InvalidPattern {
        field: field.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_pattern() {
        let mut config = Config::default();
        config.rules.idle_timeout = "  ".to_string();

        let result = validate(&config);
        assert!(matches!(
            result,
            Err(ValidationError::EmptyPattern { ref field }) if field == "idle_timeout"
        ));
    }

    #[test]
    fn test_invalid_regex() {
        let mut config = Config::default();
        config.rules.expiration = "([0-9]+".to_string();

        let result = validate(&config);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidPattern { ref field, .. }) if field == "expiration"
        ));
    }

    #[test]
    fn test_delta_without_unit_group() {
        let mut config = Config::default();
        config.rules.expiration_delta = "([0-9]+)".to_string();

        let result = validate(&config);
        assert!(matches!(
            result,
            Err(ValidationError::MissingDeltaGroups { found: 1 })
        ));
    }

    #[test]
    fn test_empty_log_filter() {
        let mut config = Config::default();
        config.logging.filter = String::new();

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::EmptyLogFilter)));
    }
}
