//! HTTP transport module
//!
//! Defines the [`Transport`] seam and the reqwest-backed [`HttpClient`].
//!
//! # Features
//!
//! - **Transport trait**: `issue(request) -> body`, the only I/O the rest of the crate sees
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Authentication**: Bearer token from the Increase API key

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{ApiRequest, Transport};
