//! Presence-aware optional field
//!
//! Every attribute of an Increase object can be missing from the payload,
//! explicitly `null`, or carry a value. `Field<T>` keeps those three states
//! apart so a decoded object re-encodes to the same JSON it came from.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// A field that is unset, explicitly null, or set to a value.
///
/// Struct fields of this type are declared with
/// `#[serde(skip_serializing_if = "Field::is_unset")]` inside a
/// `#[serde(default)]` container, which gives:
///
/// | wire            | decoded           | re-encoded      |
/// |-----------------|-------------------|-----------------|
/// | key absent      | `Field::Unset`    | key absent      |
/// | `"key": null`   | `Field::Null`     | `"key": null`   |
/// | `"key": v`      | `Field::Value(v)` | `"key": v`      |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Key not present in the payload
    Unset,
    /// Key present with a JSON `null`
    Null,
    /// Key present with a value
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    /// Build a field from an option: `None` becomes an explicit null
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }

    /// True if the key was absent
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// True if the key was present with `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// True if the key was present, with or without a value
    pub fn is_present(&self) -> bool {
        !self.is_unset()
    }

    /// True if the field carries a value
    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    /// Borrow the value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Mutably borrow the value, if any
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Take the value, collapsing unset and null to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the value through `Deref`, e.g. `Field<String>` to `Option<&str>`
    pub fn as_deref(&self) -> Option<&T::Target>
    where
        T: Deref,
    {
        self.value().map(Deref::deref)
    }

    /// Map the value, preserving unset and null
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }

    /// Convert `&Field<T>` to `Field<&T>`
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::Value(value.to_string())
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            Field::Unset | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from_option)
    }
}

#[cfg(test)]
mod field_tests {
    use super::*;

    #[test]
    fn test_field_default_is_unset() {
        let field: Field<String> = Field::default();
        assert!(field.is_unset());
        assert!(!field.is_present());
    }

    #[test]
    fn test_field_accessors() {
        let field: Field<String> = Field::from("acct_123");
        assert!(field.is_value());
        assert_eq!(field.as_deref(), Some("acct_123"));

        let null: Field<String> = Field::Null;
        assert!(null.is_null());
        assert!(null.is_present());
        assert_eq!(null.value(), None);
    }

    #[test]
    fn test_field_map_preserves_state() {
        assert_eq!(Field::Value(2).map(|v| v * 10), Field::Value(20));
        assert_eq!(Field::<i32>::Null.map(|v| v * 10), Field::Null);
        assert_eq!(Field::<i32>::Unset.map(|v| v * 10), Field::Unset);
    }

    #[test]
    fn test_field_from_option() {
        assert_eq!(Field::from_option(Some(1)), Field::Value(1));
        assert_eq!(Field::<i32>::from_option(None), Field::Null);
    }

    #[test]
    fn test_field_deserialize() {
        let value: Field<i64> = serde_json::from_str("42").unwrap();
        assert_eq!(value, Field::Value(42));

        let null: Field<i64> = serde_json::from_str("null").unwrap();
        assert_eq!(null, Field::Null);

        assert!(serde_json::from_str::<Field<i64>>("\"42\"").is_err());
    }
}
