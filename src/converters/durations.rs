//! Legacy time quantities to `"<seconds>s"` duration strings

use crate::error::ConversionError;
use crate::humanize::format_seconds;
use crate::rules::{LegacyRules, Pattern};

const SECONDS_PER_MINUTE: u64 = 60;
const MILLISECONDS_PER_SECOND: f64 = 1000.0;

/// `"200ms"` -> `"0.2s"`, `"3s"` -> `"3s"`, `"automatic"` -> `None`
pub fn latency_to_duration(
    rules: &dyn LegacyRules,
    value: &str,
) -> Result<Option<String>, ConversionError> {
    if !rules.matches(Pattern::PendingLatency, value) {
        return Err(ConversionError::unrecognized("latency", value));
    }
    if value == "automatic" {
        return Ok(None);
    }

    match value.strip_suffix("ms") {
        Some(millis) => {
            let millis: f64 = millis
                .parse()
                .map_err(|_| ConversionError::unrecognized("latency", value))?;
            Ok(Some(format_seconds(millis / MILLISECONDS_PER_SECOND)))
        }
        None => Ok(Some(value.to_string())),
    }
}

/// `"5m"` -> `"300s"`, `"30s"` -> `"30s"`
pub fn idle_timeout_to_duration(
    rules: &dyn LegacyRules,
    value: &str,
) -> Result<String, ConversionError> {
    if !rules.matches(Pattern::IdleTimeout, value) {
        return Err(ConversionError::unrecognized("idle timeout", value));
    }

    match value.strip_suffix('m') {
        Some(minutes) => minutes
            .parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(SECONDS_PER_MINUTE))
            .map(format_seconds)
            .ok_or_else(|| ConversionError::unrecognized("idle timeout", value)),
        None => Ok(value.to_string()),
    }
}

/// `"2d 3h"` -> `"183600s"`
pub fn expiration_to_duration(
    rules: &dyn LegacyRules,
    value: &str,
) -> Result<String, ConversionError> {
    if !rules.matches(Pattern::Expiration, value) {
        return Err(ConversionError::unrecognized("expiration", value));
    }

    let delta = rules.parse_expiration(value)?;
    Ok(format_seconds(delta))
}
