use crate::humanize::DEFAULT_DELTA_PATTERN;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Legacy schema patterns used to validate scalar values before conversion
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Pending latency, e.g. `"200ms"`, `"1.5s"` or `"automatic"`
    #[serde(default = "default_pending_latency")]
    pub pending_latency: String,
    /// Idle timeout, e.g. `"5m"` or `"30s"`
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: String,
    /// Static file expiration, e.g. `"4d 5h"`
    #[serde(default = "default_expiration")]
    pub expiration: String,
    /// One `<amount><unit>` token within an expiration string.
    /// Group 1 is the amount and group 2 the unit.
    #[serde(default = "default_expiration_delta")]
    pub expiration_delta: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            pending_latency: default_pending_latency(),
            idle_timeout: default_idle_timeout(),
            expiration: default_expiration(),
            expiration_delta: default_expiration_delta(),
        }
    }
}

fn default_pending_latency() -> String {
    r"^(\d+((\.\d{1,3})?s|ms)|automatic)$".to_string()
}

fn default_idle_timeout() -> String {
    r"^[\d]+(s|m)$".to_string()
}

fn default_expiration() -> String {
    format!(
        r"^\s*{delta}(\s+{delta})*\s*$",
        delta = DEFAULT_DELTA_PATTERN
    )
}

fn default_expiration_delta() -> String {
    DEFAULT_DELTA_PATTERN.to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}
