//! Query-string encoding module
//!
//! Turns list parameter structs into `key=value` pairs.
//!
//! # Overview
//!
//! Parameters are serialized through serde, so the same [`Field`] presence
//! rules as the JSON codec apply: unset fields never appear. Nested filters
//! such as `created_at` are flattened (`created_at.on_or_after=...`) and
//! arrays are comma-joined, matching what Increase list endpoints expect.
//!
//! [`Field`]: crate::codec::Field

mod encoder;
mod types;

pub use encoder::{encode_query, to_query};
pub use types::{ArrayFormat, NestedFormat, QuerySettings};
