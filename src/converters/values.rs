use serde_json::Value;

use crate::error::ConversionError;
use crate::humanize::format_seconds;

const AUTOMATIC: &str = "automatic";

/// Translates a legacy string into an enum token, e.g. `"ok"` -> `"STATUS_OK"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConverter {
    prefix: String,
}

impl EnumConverter {
    /// The prefix must be non-empty, upper-cased and free of a trailing underscore.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConversionError> {
        let prefix = prefix.into();

        if prefix.is_empty() {
            return Err(ConversionError::InvalidArgument(
                "a prefix must be provided".to_string(),
            ));
        }
        if prefix != prefix.to_uppercase() {
            return Err(ConversionError::InvalidArgument(format!(
                "upper-cased prefix must be provided: \"{}\"",
                prefix
            )));
        }
        if prefix.ends_with('_') {
            return Err(ConversionError::InvalidArgument(format!(
                "prefix should not contain a trailing underscore: \"{}\"",
                prefix
            )));
        }

        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn convert(&self, value: &str) -> String {
        format!("{}_{}", self.prefix, value.to_uppercase())
    }
}

/// Boolean negation; anything but a boolean is a type mismatch
pub fn not(value: &Value) -> Result<bool, ConversionError> {
    value
        .as_bool()
        .map(|b| !b)
        .ok_or_else(|| ConversionError::type_mismatch("boolean", value))
}

/// Render a primitive as text. Booleans use JSON spelling (`true`/`false`).
pub fn to_json_string(value: &Value) -> Result<String, ConversionError> {
    match value {
        Value::Array(_) | Value::Object(_) => {
            Err(ConversionError::type_mismatch("primitive", value))
        }
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
    }
}

/// Parses integer strings, optionally mapping `"automatic"` to zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringToInt {
    handle_automatic: bool,
}

impl StringToInt {
    pub fn new(handle_automatic: bool) -> Self {
        Self { handle_automatic }
    }

    pub fn handles_automatic(&self) -> bool {
        self.handle_automatic
    }

    pub fn convert(&self, value: &str) -> Result<i64, ConversionError> {
        if self.handle_automatic && value == AUTOMATIC {
            return Ok(0);
        }

        value
            .trim()
            .parse::<i64>()
            .map_err(|source| ConversionError::InvalidInteger {
                value: value.to_string(),
                source,
            })
    }
}

pub fn seconds_to_duration(value: i64) -> String {
    format_seconds(value)
}
