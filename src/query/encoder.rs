//! Query encoder implementation
//!
//! Walks the JSON form of a parameter struct and flattens it into pairs.

use super::types::{ArrayFormat, NestedFormat, QuerySettings};
use crate::error::{Error, Result};
use crate::types::{JsonValue, QueryPairs};
use serde::Serialize;

/// Encode a parameter struct with the Increase defaults
/// (dotted nesting, comma-joined arrays).
pub fn to_query<T: Serialize>(params: &T) -> Result<QueryPairs> {
    encode_query(params, &QuerySettings::default())
}

/// Encode a parameter struct into query pairs.
///
/// Unset fields and explicit nulls produce no pair.
pub fn encode_query<T: Serialize>(params: &T, settings: &QuerySettings) -> Result<QueryPairs> {
    let value = serde_json::to_value(params).map_err(|e| Error::encode(e.to_string()))?;
    let mut pairs = Vec::new();
    match value {
        JsonValue::Object(map) => {
            for (key, value) in map {
                flatten(&key, value, settings, &mut pairs);
            }
        }
        JsonValue::Null => {}
        other => {
            return Err(Error::encode(format!(
                "query parameters must serialize to an object, got {other}"
            )))
        }
    }
    Ok(pairs)
}

fn flatten(key: &str, value: JsonValue, settings: &QuerySettings, pairs: &mut QueryPairs) {
    match value {
        JsonValue::Null => {}
        JsonValue::Object(map) => {
            for (child, value) in map {
                let nested = nested_key(key, &child, settings.nested);
                flatten(&nested, value, settings, pairs);
            }
        }
        JsonValue::Array(items) => flatten_array(key, items, settings, pairs),
        scalar => {
            if let Some(text) = scalar_to_string(&scalar) {
                pairs.push((key.to_string(), text));
            }
        }
    }
}

fn flatten_array(key: &str, items: Vec<JsonValue>, settings: &QuerySettings, pairs: &mut QueryPairs) {
    if items.is_empty() {
        return;
    }

    // Arrays of objects or arrays cannot be comma-joined; index them instead
    if items
        .iter()
        .any(|item| item.is_object() || item.is_array())
    {
        for (index, item) in items.into_iter().enumerate() {
            let indexed = nested_key(key, &index.to_string(), settings.nested);
            flatten(&indexed, item, settings, pairs);
        }
        return;
    }

    match settings.array {
        ArrayFormat::Comma => {
            let joined: Vec<String> = items.iter().filter_map(scalar_to_string).collect();
            if !joined.is_empty() {
                pairs.push((key.to_string(), joined.join(",")));
            }
        }
        ArrayFormat::Repeat => {
            for text in items.iter().filter_map(scalar_to_string) {
                pairs.push((key.to_string(), text));
            }
        }
        ArrayFormat::Brackets => {
            let bracketed = format!("{key}[]");
            for text in items.iter().filter_map(scalar_to_string) {
                pairs.push((bracketed.clone(), text));
            }
        }
    }
}

fn nested_key(parent: &str, child: &str, format: NestedFormat) -> String {
    match format {
        NestedFormat::Dots => format!("{parent}.{child}"),
        NestedFormat::Brackets => format!("{parent}[{child}]"),
    }
}

fn scalar_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}
