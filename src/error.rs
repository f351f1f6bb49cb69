//! Error taxonomy shared by value converters and the handler transformer

use std::num::ParseIntError;
use thiserror::Error;

/// Coarse failure category, independent of the concrete variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    TypeMismatch,
    Parse,
    Classification,
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{context} is missing required field '{field}'")]
    MissingField {
        context: &'static str,
        field: &'static str,
    },

    #[error("expected {expected} value, got {got}")]
    TypeMismatch { expected: &'static str, got: String },

    #[error("unrecognized {what}: {value}")]
    Unrecognized { what: &'static str, value: String },

    #[error("invalid integer '{value}': {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unrecognized handler type: {0}")]
    UnrecognizedHandler(String),
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::MissingField { .. } => ErrorKind::InvalidArgument,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Unrecognized { .. } | Self::InvalidInteger { .. } => ErrorKind::Parse,
            Self::UnrecognizedHandler(_) => ErrorKind::Classification,
        }
    }

    pub(crate) fn type_mismatch(expected: &'static str, got: &serde_json::Value) -> Self {
        Self::TypeMismatch {
            expected,
            got: got.to_string(),
        }
    }

    pub(crate) fn unrecognized(what: &'static str, value: impl Into<String>) -> Self {
        Self::Unrecognized {
            what,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            ConversionError::InvalidArgument("x".into()).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ConversionError::type_mismatch("boolean", &json!("x")).kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            ConversionError::unrecognized("latency", "bogus").kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            ConversionError::UnrecognizedHandler("{}".into()).kind(),
            ErrorKind::Classification
        );
    }

    #[test]
    fn test_display() {
        let err = ConversionError::unrecognized("idle timeout", "5h");
        assert_eq!(err.to_string(), "unrecognized idle timeout: 5h");

        let err = ConversionError::type_mismatch("boolean", &json!("x"));
        assert_eq!(err.to_string(), "expected boolean value, got \"x\"");
    }
}
