// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Increase
//!
//! A typed client for the [Increase](https://increase.com) banking API.
//!
//! ## Features
//!
//! - **Presence-aware fields**: every attribute is a [`Field`] that tells
//!   "absent", "null" and "set" apart
//! - **Lossless objects**: keys the library does not know about are kept and
//!   written back on encode
//! - **Cursor pagination**: [`Page`] snapshots, a [`PageState`] machine and an
//!   item-level [`AutoPager`]
//! - **Resilient transport**: retries with backoff, `Retry-After` handling
//!   and optional client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use increase::{Increase, Result};
//! use increase::resources::AccountNumberListParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Increase::from_env()?;
//!
//!     let params = AccountNumberListParams {
//!         limit: 50.into(),
//!         ..Default::default()
//!     };
//!     let mut numbers = client.account_numbers().list_auto_paging(&params).await?;
//!     while let Some(number) = numbers.next_item().await? {
//!         println!("{:?} {:?}", number.id, number.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Increase (client)                        │
//! │  accounts()  account_numbers()  ach_transfers()  ...         │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────┬───┴────────┬──────────────────────┐
//! │  Codec     │  Query     │ Pagination │  HTTP                │
//! ├────────────┼────────────┼────────────┼──────────────────────┤
//! │ Field<T>   │ dots       │ Page<T>    │ Transport trait      │
//! │ extras     │ brackets   │ PageState  │ Retry / Backoff      │
//! │ enums      │ arrays     │ AutoPager  │ Rate Limit           │
//! └────────────┴────────────┴────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Presence-aware JSON codec
pub mod codec;

/// Query-string encoding for list parameters
pub mod query;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Client configuration
pub mod config;

/// Client entry point
pub mod client;

/// API resources and their services
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Increase;
pub use codec::{ApiObject, Field};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ApiErrorBody, Error, Result};
pub use http::{ApiRequest, HttpClient, Transport};
pub use pagination::{AutoPager, ListEnvelope, Page, PageState};
pub use types::*;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
