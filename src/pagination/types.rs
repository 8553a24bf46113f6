//! Pagination types
//!
//! The list envelope returned by every Increase list endpoint.

use crate::codec::{ApiObject, Field};
use crate::types::JsonObject;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Query parameter that carries the continuation cursor
pub const CURSOR_PARAM: &str = "cursor";

/// `{ "data": [...], "next_cursor": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Opaque cursor for the next page; null or absent on the last page
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub next_cursor: Field<String>,
    #[serde(flatten)]
    pub extras: JsonObject,
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            next_cursor: Field::Unset,
            extras: JsonObject::new(),
        }
    }
}

impl<T> ListEnvelope<T> {
    /// Cursor for the next page, if there is one.
    ///
    /// An empty string is treated like a missing cursor.
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref().filter(|c| !c.is_empty())
    }
}

impl<T: Serialize + DeserializeOwned> ApiObject for ListEnvelope<T> {
    fn extras(&self) -> &JsonObject {
        &self.extras
    }

    fn extras_mut(&mut self) -> &mut JsonObject {
        &mut self.extras
    }
}
