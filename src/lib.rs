pub mod config;
pub mod converters;
pub mod error;
pub mod handlers;
pub mod humanize;
pub mod observability;
pub mod rules;

pub use error::{ConversionError, ErrorKind};
