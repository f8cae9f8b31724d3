use serde::Deserialize;
use serde_json::Value;

use crate::types::{lenient, DesignDirective, EventRecord, DEFAULT_SYSTEM_NAME, DEFAULT_VERSION};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("design directive must be a JSON object")]
    NotAnObject,

    #[error("event #{index} is not a JSON object")]
    Event { index: usize },
}

/// File layout of a directive. Metadata falls back to its defaults; the
/// events path is kept raw since a non-array there is not an error.
#[derive(Debug, Deserialize)]
struct RawDirective {
    #[serde(default = "default_system_name", deserialize_with = "system_name_or_default")]
    system_name: String,
    #[serde(default = "default_version", deserialize_with = "version_or_default")]
    version: String,
    #[serde(default)]
    preview_directive: Value,
}

fn default_system_name() -> String {
    DEFAULT_SYSTEM_NAME.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn system_name_or_default<'de, D: serde::Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(lenient::text(de)?.unwrap_or_else(default_system_name))
}

fn version_or_default<'de, D: serde::Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(lenient::text(de)?.unwrap_or_else(default_version))
}

pub fn parse_directive(json: &str) -> Result<DesignDirective, ParseError> {
    let root: Value = serde_json::from_str(json)?;
    directive_from_value(root)
}

/// Build a directive from an already-parsed JSON document.
///
/// Only syntax, a non-object root and non-object event elements are fatal.
/// A missing or non-array `preview_directive.events` yields `events: None`.
pub fn directive_from_value(root: Value) -> Result<DesignDirective, ParseError> {
    if !root.is_object() {
        return Err(ParseError::NotAnObject);
    }
    let mut raw = RawDirective::deserialize(root)?;

    let events = match raw.preview_directive.get_mut("events").map(Value::take) {
        Some(Value::Array(items)) => Some(parse_events(items)?),
        _ => None,
    };

    Ok(DesignDirective {
        system_name: raw.system_name,
        version: raw.version,
        events,
    })
}

fn parse_events(items: Vec<Value>) -> Result<Vec<EventRecord>, ParseError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(ParseError::Event { index });
            }
            Ok(EventRecord::deserialize(item)?)
        })
        .collect()
}
