//! JSON codec module
//!
//! Presence-aware fields, open-schema objects and string-backed enums.
//!
//! # Overview
//!
//! Every Increase object is a struct of [`Field`]s plus an `extras` map:
//!
//! ```rust,ignore
//! #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
//! #[serde(default)]
//! pub struct AccountNumber {
//!     #[serde(skip_serializing_if = "Field::is_unset")]
//!     pub id: Field<String>,
//!     #[serde(flatten)]
//!     pub extras: JsonObject,
//! }
//! increase::api_object!(AccountNumber);
//! ```
//!
//! [`decode`] keeps absent, null and present keys apart and collects unknown
//! keys into `extras`. [`encode`] writes present fields then overlays extras.

mod enums;
mod field;
mod object;

pub use field::Field;
pub use object::{decode, decode_value, encode, encode_value, ApiObject};
