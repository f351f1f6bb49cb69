//! Legacy schema rules consumed by the duration converters
//!
//! Converters never own pattern definitions. They ask a [`LegacyRules`]
//! implementation whether a value matches one of the legacy patterns and how
//! many seconds an expiration string denotes. [`AppInfoRules`] is the stock
//! implementation, compiled from [`RulesConfig`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::config::{RulesConfig, ValidationError, compile_pattern};
use crate::error::ConversionError;
use crate::humanize::ExpirationDelta;

/// Legacy value patterns a converter may validate against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    PendingLatency,
    IdleTimeout,
    Expiration,
}

pub trait LegacyRules: Send + Sync {
    /// Does `value` match `pattern` in its entirety?
    fn matches(&self, pattern: Pattern, value: &str) -> bool;

    /// Total seconds denoted by an expiration string such as `"2d 3h"`
    fn parse_expiration(&self, value: &str) -> Result<u64, ConversionError>;
}

/// Rules compiled from the legacy `app.yaml` schema patterns
#[derive(Debug, Clone)]
pub struct AppInfoRules {
    pending_latency: Regex,
    idle_timeout: Regex,
    expiration: Regex,
    expiration_delta: Regex,
}

static DEFAULT_RULES: Lazy<Arc<AppInfoRules>> = Lazy::new(|| {
    Arc::new(
        AppInfoRules::from_config(&RulesConfig::default()).expect("default rule patterns are valid"),
    )
});

impl AppInfoRules {
    pub fn from_config(config: &RulesConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            pending_latency: compile_anchored("pending_latency", &config.pending_latency)?,
            idle_timeout: compile_anchored("idle_timeout", &config.idle_timeout)?,
            expiration: compile_anchored("expiration", &config.expiration)?,
            expiration_delta: compile_pattern("expiration_delta", &config.expiration_delta)?,
        })
    }

    /// Shared instance built from the default patterns
    pub fn shared() -> Arc<AppInfoRules> {
        Arc::clone(&DEFAULT_RULES)
    }

    fn regex(&self, pattern: Pattern) -> &Regex {
        match pattern {
            Pattern::PendingLatency => &self.pending_latency,
            Pattern::IdleTimeout => &self.idle_timeout,
            Pattern::Expiration => &self.expiration,
        }
    }
}

impl Default for AppInfoRules {
    fn default() -> Self {
        DEFAULT_RULES.as_ref().clone()
    }
}

impl LegacyRules for AppInfoRules {
    fn matches(&self, pattern: Pattern, value: &str) -> bool {
        self.regex(pattern).is_match(value)
    }

    fn parse_expiration(&self, value: &str) -> Result<u64, ConversionError> {
        ExpirationDelta::parse_with(&self.expiration_delta, value)
            .map(|delta| delta.as_secs())
            .map_err(|err| {
                tracing::debug!(error = %err, value, "Expiration delta rejected");
                ConversionError::unrecognized("expiration", value)
            })
    }
}

/// Compile `pattern` so that it must match the whole value
fn compile_anchored(field: &str, pattern: &str) -> Result<Regex, ValidationError> {
    // Reject malformed patterns with their own error position first
    compile_pattern(field, pattern)?;
    compile_pattern(field, &format!("^(?:{})$", pattern))
}
