use serde_json::Value;
use std::sync::Arc;

use super::durations::{expiration_to_duration, idle_timeout_to_duration, latency_to_duration};
use super::values::{EnumConverter, StringToInt, not, seconds_to_duration, to_json_string};
use crate::error::ConversionError;
use crate::rules::LegacyRules;

/// A single-field conversion applied by the schema walker
///
/// Implementations are pure: the same input always yields the same output,
/// and converters can be shared freely across threads.
pub trait Converter: Send + Sync {
    fn convert(&self, value: &Value) -> Result<Value, ConversionError>;
}

fn expect_str<'a>(value: &'a Value) -> Result<&'a str, ConversionError> {
    value
        .as_str()
        .ok_or_else(|| ConversionError::type_mismatch("string", value))
}

impl Converter for EnumConverter {
    fn convert(&self, value: &Value) -> Result<Value, ConversionError> {
        Ok(Value::String(EnumConverter::convert(self, expect_str(value)?)))
    }
}

impl Converter for StringToInt {
    fn convert(&self, value: &Value) -> Result<Value, ConversionError> {
        match value {
            Value::Number(n) if n.is_i64() => Ok(value.clone()),
            Value::String(s) => Ok(Value::from(StringToInt::convert(self, s)?)),
            other => Err(ConversionError::type_mismatch("integer string", other)),
        }
    }
}

/// Plain function converters that need no configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarConverter {
    Not,
    ToJsonString,
    SecondsToDuration,
}

impl Converter for ScalarConverter {
    fn convert(&self, value: &Value) -> Result<Value, ConversionError> {
        match self {
            Self::Not => not(value).map(Value::Bool),
            Self::ToJsonString => to_json_string(value).map(Value::String),
            Self::SecondsToDuration => {
                let seconds = match value {
                    Value::Number(n) => n.as_i64(),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                }
                .ok_or_else(|| ConversionError::type_mismatch("integer", value))?;
                Ok(Value::String(seconds_to_duration(seconds)))
            }
        }
    }
}

/// Duration converters validated against the legacy rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationKind {
    Latency,
    IdleTimeout,
    Expiration,
}

#[derive(Clone)]
pub struct DurationConverter {
    kind: DurationKind,
    rules: Arc<dyn LegacyRules>,
}

impl DurationConverter {
    pub fn new(kind: DurationKind, rules: Arc<dyn LegacyRules>) -> Self {
        Self { kind, rules }
    }

    pub fn kind(&self) -> DurationKind {
        self.kind
    }
}

impl Converter for DurationConverter {
    fn convert(&self, value: &Value) -> Result<Value, ConversionError> {
        let value = expect_str(value)?;
        let rules = self.rules.as_ref();

        let converted = match self.kind {
            DurationKind::Latency => latency_to_duration(rules, value)?,
            DurationKind::IdleTimeout => Some(idle_timeout_to_duration(rules, value)?),
            DurationKind::Expiration => Some(expiration_to_duration(rules, value)?),
        };

        Ok(converted.map_or(Value::Null, Value::String))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rules::AppInfoRules;
    use serde_json::json;

    #[test]
    fn test_enum_converter_requires_string() {
        let converter = EnumConverter::new("LOGIN").unwrap();
        assert_eq!(
            Converter::convert(&converter, &json!("admin")).unwrap(),
            json!("LOGIN_ADMIN")
        );

        let err = Converter::convert(&converter, &json!(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_string_to_int_value() {
        let converter = StringToInt::new(true);
        assert_eq!(Converter::convert(&converter, &json!("42")).unwrap(), json!(42));
        assert_eq!(Converter::convert(&converter, &json!("automatic")).unwrap(), json!(0));
        assert_eq!(Converter::convert(&converter, &json!(9)).unwrap(), json!(9));

        let err = Converter::convert(&converter, &json!(true)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_scalar_converters() {
        assert_eq!(ScalarConverter::Not.convert(&json!(true)).unwrap(), json!(false));
        assert_eq!(
            ScalarConverter::ToJsonString.convert(&json!(false)).unwrap(),
            json!("false")
        );
        assert_eq!(
            ScalarConverter::SecondsToDuration.convert(&json!(5)).unwrap(),
            json!("5s")
        );
        assert_eq!(
            ScalarConverter::SecondsToDuration.convert(&json!("10")).unwrap(),
            json!("10s")
        );
    }

    #[test]
    fn test_duration_converter() {
        let rules: Arc<dyn LegacyRules> = AppInfoRules::shared();

        let latency = DurationConverter::new(DurationKind::Latency, Arc::clone(&rules));
        assert_eq!(latency.kind(), DurationKind::Latency);
        assert_eq!(latency.convert(&json!("200ms")).unwrap(), json!("0.2s"));
        assert_eq!(latency.convert(&json!("automatic")).unwrap(), Value::Null);

        let idle = DurationConverter::new(DurationKind::IdleTimeout, Arc::clone(&rules));
        assert_eq!(idle.convert(&json!("5m")).unwrap(), json!("300s"));

        let expiration = DurationConverter::new(DurationKind::Expiration, rules);
        assert_eq!(expiration.convert(&json!("1d")).unwrap(), json!("86400s"));
        assert_eq!(
            expiration.convert(&json!(86400)).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }
}
