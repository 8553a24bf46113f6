//! Object codec
//!
//! Decoding and encoding of Increase objects with extras preservation.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A JSON object type with an open schema.
///
/// Implementors keep every key they do not declare in an `extras` map
/// (`#[serde(flatten)]`). On encode the extras are written after the
/// declared fields, so an extras entry replaces a declared field of the
/// same name.
pub trait ApiObject: Serialize + DeserializeOwned {
    /// Keys that did not match a declared field
    fn extras(&self) -> &JsonObject;

    /// Mutable access to the extras
    fn extras_mut(&mut self) -> &mut JsonObject;

    /// Decode from JSON bytes
    fn from_json(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }

    /// Encode to JSON bytes
    fn to_json(&self) -> Result<Vec<u8>> {
        encode(self)
    }

    /// Encode to a JSON value
    fn to_value(&self) -> Result<JsonValue> {
        encode_value(self)
    }
}

/// Implement [`ApiObject`] for structs carrying an `extras: JsonObject` field
#[macro_export]
macro_rules! api_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::codec::ApiObject for $ty {
                fn extras(&self) -> &$crate::types::JsonObject {
                    &self.extras
                }

                fn extras_mut(&mut self) -> &mut $crate::types::JsonObject {
                    &mut self.extras
                }
            }
        )+
    };
}

/// Decode a JSON payload into an object.
///
/// The payload must be a JSON object. A field whose value has the wrong
/// JSON type fails the whole decode.
pub fn decode<T: ApiObject>(bytes: &[u8]) -> Result<T> {
    let value: JsonValue = serde_json::from_slice(bytes)
        .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;
    decode_value(value)
}

/// Decode an already parsed JSON value into an object
pub fn decode_value<T: ApiObject>(value: JsonValue) -> Result<T> {
    if !value.is_object() {
        return Err(Error::decode(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| Error::decode(e.to_string()))
}

/// Encode an object into a JSON value.
///
/// Unset fields are skipped and extras are overlaid on the declared fields.
pub fn encode_value<T: ApiObject>(object: &T) -> Result<JsonValue> {
    // Building a `Value` (rather than writing straight to bytes) is what
    // collapses a duplicated key into a single last-write-wins entry.
    let value = serde_json::to_value(object).map_err(|e| Error::encode(e.to_string()))?;
    if !value.is_object() {
        return Err(Error::encode(format!(
            "expected object to encode as a JSON object, got {}",
            json_kind(&value)
        )));
    }
    Ok(value)
}

/// Encode an object into JSON bytes
pub fn encode<T: ApiObject>(object: &T) -> Result<Vec<u8>> {
    let value = encode_value(object)?;
    serde_json::to_vec(&value).map_err(|e| Error::encode(e.to_string()))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
