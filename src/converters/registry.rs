use std::collections::BTreeMap;
use std::sync::Arc;

use super::traits::{Converter, DurationConverter, DurationKind, ScalarConverter};
use super::values::{EnumConverter, StringToInt};
use crate::error::ConversionError;
use crate::rules::{AppInfoRules, LegacyRules};

/// Prefix selecting an on-demand enum converter, e.g. `enum:LOGIN`
pub const ENUM_PREFIX: &str = "enum:";

/// Registry mapping converter names to converter instances
#[derive(Clone)]
pub struct ConverterRegistry {
    converters: BTreeMap<String, Arc<dyn Converter>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            converters: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, converter: Arc<dyn Converter>) {
        self.converters.insert(name.into(), converter);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Converter>> {
        self.converters.get(name).cloned()
    }

    pub fn has_converter(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.converters.keys().map(String::as_str)
    }

    /// Look up a registered converter, or build an enum converter for
    /// `enum:<PREFIX>` names.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Converter>, ConversionError> {
        if let Some(prefix) = name.strip_prefix(ENUM_PREFIX) {
            return Ok(Arc::new(EnumConverter::new(prefix)?));
        }

        self.get(name)
            .ok_or_else(|| ConversionError::InvalidArgument(format!("unknown converter: {}", name)))
    }

    /// Create a registry with every built-in converter, validating durations
    /// against `rules`
    pub fn with_rules(rules: Arc<dyn LegacyRules>) -> Self {
        let mut registry = Self::new();

        registry.register("not", Arc::new(ScalarConverter::Not));
        registry.register("to_json_string", Arc::new(ScalarConverter::ToJsonString));
        registry.register("seconds_to_duration", Arc::new(ScalarConverter::SecondsToDuration));
        registry.register("string_to_int", Arc::new(StringToInt::new(false)));
        registry.register("string_to_int_automatic", Arc::new(StringToInt::new(true)));

        for (name, kind) in [
            ("latency_to_duration", DurationKind::Latency),
            ("idle_timeout_to_duration", DurationKind::IdleTimeout),
            ("expiration_to_duration", DurationKind::Expiration),
        ] {
            registry.register(name, Arc::new(DurationConverter::new(kind, Arc::clone(&rules))));
        }

        registry
    }

    /// Create a registry backed by the default legacy rules
    pub fn with_defaults() -> Self {
        Self::with_rules(AppInfoRules::shared())
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_defaults_registered() {
        let registry = ConverterRegistry::with_defaults();
        for name in [
            "not",
            "to_json_string",
            "seconds_to_duration",
            "string_to_int",
            "string_to_int_automatic",
            "latency_to_duration",
            "idle_timeout_to_duration",
            "expiration_to_duration",
        ] {
            assert!(registry.has_converter(name), "{name}");
        }
        assert_eq!(registry.names().count(), 8);
    }

    #[test]
    fn test_resolve_named() {
        let registry = ConverterRegistry::default();
        let converter = registry.resolve("idle_timeout_to_duration").unwrap();
        assert_eq!(converter.convert(&json!("2m")).unwrap(), json!("120s"));
    }

    #[test]
    fn test_resolve_enum() {
        let registry = ConverterRegistry::new();
        let converter = registry.resolve("enum:LOGIN").unwrap();
        assert_eq!(converter.convert(&json!("admin")).unwrap(), json!("LOGIN_ADMIN"));

        let err = registry.resolve("enum:login").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ConverterRegistry::with_defaults();
        let err = registry.resolve("frobnicate").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_custom_registration() {
        let mut registry = ConverterRegistry::new();
        registry.register("negate", Arc::new(ScalarConverter::Not));

        assert!(registry.has_converter("negate"));
        assert!(registry.get("not").is_none());
    }
}
