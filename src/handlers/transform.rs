use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

use super::types::{COMMON_HANDLER_FIELDS, HandlerRecord, HandlerType, UrlHandler};
use crate::error::ConversionError;

/// Join a URL path and a regex with exactly one forward slash.
///
/// Trailing slashes on `path` are dropped; the host's path separator is never used.
pub fn append_regex_to_path(path: &str, regex: &str) -> String {
    format!("{}/{}", path.trim_end_matches('/'), regex)
}

fn string_field<'a>(
    handler: &'a HandlerRecord,
    field: &'static str,
) -> Result<&'a str, ConversionError> {
    let value = handler.get(field).ok_or(ConversionError::MissingField {
        context: "staticDir handler",
        field,
    })?;

    value
        .as_str()
        .ok_or_else(|| ConversionError::type_mismatch("string", value))
}

/// Rewrite a `staticDir` handler as the equivalent `staticFiles` handler
fn expand_static_directory(handler: &HandlerRecord) -> Result<HandlerRecord, ConversionError> {
    let dir = string_field(handler, "staticDir")?;
    let url_regex = string_field(handler, "urlRegex")?;

    let path = append_regex_to_path(dir, r"\1");
    let upload_path_regex = append_regex_to_path(dir, ".*");
    let url_regex = append_regex_to_path(url_regex, "(.*)");

    let mut expanded = handler.clone();
    expanded.remove("staticDir");
    expanded.insert("path".to_string(), Value::String(path));
    expanded.insert("uploadPathRegex".to_string(), Value::String(upload_path_regex));
    expanded.insert("urlRegex".to_string(), Value::String(url_regex));

    Ok(expanded)
}

/// Classify `handler`, expand shorthand and split it into common fields plus
/// the type-specific sub-message. Unknown fields are dropped.
pub fn restructure(handler: &HandlerRecord) -> Result<UrlHandler, ConversionError> {
    let resolved = HandlerType::resolve(handler)?;

    let handler: Cow<'_, HandlerRecord> = if resolved.is_sugar() {
        Cow::Owned(expand_static_directory(handler)?)
    } else {
        Cow::Borrowed(handler)
    };
    let handler_type = resolved.canonical();

    let pick = |names: &[&str]| -> Map<String, Value> {
        names
            .iter()
            .filter_map(|name| handler.get(*name).map(|v| (name.to_string(), v.clone())))
            .collect()
    };

    let fields = pick(handler_type.fields());
    let common = pick(COMMON_HANDLER_FIELDS);

    let dropped: Vec<&str> = handler
        .keys()
        .map(String::as_str)
        .filter(|key| !fields.contains_key(*key) && !common.contains_key(*key))
        .collect();
    debug!(
        %resolved,
        %handler_type,
        kept = fields.len() + common.len(),
        ?dropped,
        "Restructured URL handler"
    );

    Ok(UrlHandler {
        handler_type,
        fields,
        common,
    })
}

/// Convert one legacy URL handler into its nested representation.
///
/// ```rust
/// use serde_json::json;
/// use yamlconv::handlers::convert_url_handler;
///
/// let handler = json!({"urlRegex": "foo/bar.html", "path": "static_files/foo/bar.html"});
/// let converted = convert_url_handler(handler.as_object().unwrap()).unwrap();
///
/// assert_eq!(
///     serde_json::Value::Object(converted),
///     json!({"urlRegex": "foo/bar.html", "staticFiles": {"path": "static_files/foo/bar.html"}})
/// );
/// ```
pub fn convert_url_handler(handler: &HandlerRecord) -> Result<HandlerRecord, ConversionError> {
    restructure(handler).map(UrlHandler::into_record)
}

/// Convert every handler in a document, stopping at the first failure
pub fn convert_url_handlers(handlers: &[Value]) -> Result<Vec<Value>, ConversionError> {
    handlers
        .iter()
        .map(|handler| {
            let record = handler
                .as_object()
                .ok_or_else(|| ConversionError::type_mismatch("mapping", handler))?;
            convert_url_handler(record).map(Value::Object)
        })
        .collect()
}

/// Convert the handlers of a whole document.
///
/// Accepts either a bare list of handlers or a mapping with a `handlers` list.
pub fn convert_handler_document(document: &Value) -> Result<Vec<Value>, ConversionError> {
    let handlers = match document {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("handlers") {
            Some(Value::Array(items)) => items,
            Some(other) => return Err(ConversionError::type_mismatch("handler list", other)),
            None => {
                return Err(ConversionError::MissingField {
                    context: "handler document",
                    field: "handlers",
                });
            }
        },
        other => return Err(ConversionError::type_mismatch("handler list", other)),
    };

    convert_url_handlers(handlers)
}
