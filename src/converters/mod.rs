//! Scalar value converters from legacy YAML to OnePlatform form
//!
//! ## Key Components
//!
//! - [`EnumConverter`] / [`StringToInt`] - parametrized converters, validated at construction
//! - [`not`], [`to_json_string`], [`seconds_to_duration`] - plain functions
//! - [`latency_to_duration`], [`idle_timeout_to_duration`], [`expiration_to_duration`] -
//!   duration converters checked against [`LegacyRules`](crate::rules::LegacyRules)
//! - [`Converter`] / [`ConverterRegistry`] - uniform `Value -> Value` interface selected by name
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use yamlconv::converters::{Converter, ConverterRegistry};
//!
//! let registry = ConverterRegistry::with_defaults();
//! let latency = registry.resolve("latency_to_duration").unwrap();
//! assert_eq!(latency.convert(&json!("200ms")).unwrap(), json!("0.2s"));
//! ```

mod durations;
mod registry;
mod traits;
mod values;

pub use durations::{expiration_to_duration, idle_timeout_to_duration, latency_to_duration};
pub use registry::{ConverterRegistry, ENUM_PREFIX};
pub use traits::{Converter, DurationConverter, DurationKind, ScalarConverter};
pub use values::{EnumConverter, StringToInt, not, seconds_to_duration, to_json_string};
