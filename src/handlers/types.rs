use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::ConversionError;

/// A URL handler as produced by the legacy schema walker
pub type HandlerRecord = Map<String, Value>;

/// Fields kept at the top level regardless of handler type
pub const COMMON_HANDLER_FIELDS: &[&str] = &[
    "urlRegex",
    "login",
    "authFailAction",
    "securityLevel",
    "redirectHttpResponseCode",
];

const SCRIPT_FIELDS: &[&str] = &["scriptPath"];

const STATIC_FILES_FIELDS: &[&str] = &[
    "path",
    "uploadPathRegex",
    "httpHeaders",
    "expiration",
    "applicationReadable",
    "mimeType",
    "requireMatchingFile",
];

/// Handler type, identified by which discriminant field is present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerType {
    ApiEndpoint,
    /// `static_dir` shorthand, always expanded to [`HandlerType::StaticFiles`]
    StaticDirectory,
    StaticFiles,
    Script,
}

impl HandlerType {
    /// Resolution order. The first type whose discriminant is present wins.
    pub const PRECEDENCE: [HandlerType; 4] = [
        HandlerType::ApiEndpoint,
        HandlerType::StaticDirectory,
        HandlerType::StaticFiles,
        HandlerType::Script,
    ];

    /// Key of the type's sub-message in converted output
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ApiEndpoint => "apiEndpoint",
            Self::StaticDirectory => "staticDirectory",
            Self::StaticFiles => "staticFiles",
            Self::Script => "script",
        }
    }

    /// Field whose presence identifies this type
    pub const fn discriminant(&self) -> &'static str {
        match self {
            Self::ApiEndpoint => "apiEndpoint",
            Self::StaticDirectory => "staticDir",
            Self::StaticFiles => "path",
            Self::Script => "scriptPath",
        }
    }

    pub const fn is_sugar(&self) -> bool {
        matches!(self, Self::StaticDirectory)
    }

    /// Type this one is emitted as
    pub const fn canonical(&self) -> HandlerType {
        match self {
            Self::StaticDirectory => Self::StaticFiles,
            other => *other,
        }
    }

    /// Fields copied into the sub-message of the canonical type
    pub const fn fields(&self) -> &'static [&'static str] {
        match self.canonical() {
            Self::StaticFiles => STATIC_FILES_FIELDS,
            Self::ApiEndpoint | Self::Script => SCRIPT_FIELDS,
            Self::StaticDirectory => &[],
        }
    }

    pub fn resolve(handler: &HandlerRecord) -> Result<Self, ConversionError> {
        Self::PRECEDENCE
            .into_iter()
            .find(|ty| handler.contains_key(ty.discriminant()))
            .ok_or_else(|| {
                ConversionError::UnrecognizedHandler(Value::Object(handler.clone()).to_string())
            })
    }
}

impl fmt::Display for HandlerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Restructured handler: common fields plus one type-keyed sub-message
#[derive(Debug, Clone, PartialEq)]
pub struct UrlHandler {
    /// Always canonical, never [`HandlerType::StaticDirectory`]
    pub handler_type: HandlerType,
    pub fields: Map<String, Value>,
    pub common: Map<String, Value>,
}

impl UrlHandler {
    pub fn into_record(self) -> HandlerRecord {
        let mut record = self.common;
        record.insert(self.handler_type.name().to_string(), Value::Object(self.fields));
        record
    }
}

impl From<UrlHandler> for Value {
    fn from(handler: UrlHandler) -> Self {
        Value::Object(handler.into_record())
    }
}

impl Serialize for UrlHandler {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.clone().into_record().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn record(value: Value) -> HandlerRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_resolve_each_type() {
        let cases = [
            (json!({"apiEndpoint": "x"}), HandlerType::ApiEndpoint),
            (json!({"staticDir": "x"}), HandlerType::StaticDirectory),
            (json!({"path": "x"}), HandlerType::StaticFiles),
            (json!({"scriptPath": "x"}), HandlerType::Script),
        ];

        for (handler, expected) in cases {
            assert_eq!(HandlerType::resolve(&record(handler)).unwrap(), expected);
        }
    }

    #[test]
    fn test_resolve_precedence() {
        let handler = record(json!({"scriptPath": "a", "path": "b", "apiEndpoint": "c"}));
        assert_eq!(HandlerType::resolve(&handler).unwrap(), HandlerType::ApiEndpoint);

        let handler = record(json!({"scriptPath": "a", "path": "b", "staticDir": "c"}));
        assert_eq!(HandlerType::resolve(&handler).unwrap(), HandlerType::StaticDirectory);

        let handler = record(json!({"scriptPath": "a", "path": "b"}));
        assert_eq!(HandlerType::resolve(&handler).unwrap(), HandlerType::StaticFiles);
    }

    #[test]
    fn test_resolve_unrecognized() {
        let handler = record(json!({"urlRegex": "/", "login": "admin"}));
        let err = HandlerType::resolve(&handler).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Classification);
    }

    #[test]
    fn test_sugar_is_canonicalized() {
        assert!(HandlerType::StaticDirectory.is_sugar());
        assert_eq!(HandlerType::StaticDirectory.canonical(), HandlerType::StaticFiles);
        assert_eq!(HandlerType::StaticDirectory.fields(), HandlerType::StaticFiles.fields());
        assert_eq!(HandlerType::ApiEndpoint.fields(), &["scriptPath"]);
        assert_eq!(HandlerType::Script.to_string(), "script");
    }

    #[test]
    fn test_url_handler_serializes_flat() {
        let handler = UrlHandler {
            handler_type: HandlerType::Script,
            fields: record(json!({"scriptPath": "main.app"})),
            common: record(json!({"urlRegex": "/.*"})),
        };

        assert_eq!(
            serde_json::to_value(&handler).unwrap(),
            json!({"urlRegex": "/.*", "script": {"scriptPath": "main.app"}})
        );
    }
}
