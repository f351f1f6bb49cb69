//! URL handler restructuring
//!
//! Legacy handlers are flat records whose type is implied by which
//! discriminant field is present. Converted handlers keep the common routing
//! fields at the top level and move type-specific fields into a sub-message
//! keyed by the type name.
//!
//! ## Key Components
//!
//! - [`HandlerType`] - handler classification with fixed precedence
//! - [`restructure`] - typed conversion into a [`UrlHandler`]
//! - [`convert_url_handler`] - record-to-record conversion
//! - [`append_regex_to_path`] - forward-slash URL join used for `staticDir` expansion

mod transform;
pub(crate) mod types;

pub use transform::{
    append_regex_to_path, convert_handler_document, convert_url_handler, convert_url_handlers,
    restructure,
};
pub use types::{COMMON_HANDLER_FIELDS, HandlerRecord, HandlerType, UrlHandler};
