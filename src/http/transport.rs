//! Transport abstraction
//!
//! Everything above this module talks to the network through [`Transport`],
//! so services and pagination can run against the real HTTP client or a
//! test double.

use crate::error::Result;
use crate::types::{Method, QueryPairs};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// A single API call, independent of the HTTP library that sends it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, e.g. `/account_numbers`
    pub path: String,
    /// Query parameters, in order
    pub query: QueryPairs,
    /// JSON request body
    pub body: Option<Vec<u8>>,
    /// Extra request headers (e.g. `Idempotency-Key`)
    pub headers: HashMap<String, String>,
}

impl ApiRequest {
    /// Create a request with no query or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a PATCH request
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// Append query parameters
    #[must_use]
    pub fn with_query(mut self, pairs: QueryPairs) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Set a query parameter, replacing every existing pair with that key
    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.query.retain(|(k, _)| *k != key);
        self.query.push((key, value.into()));
        self
    }

    /// Get the first value of a query parameter
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set the JSON body
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the `Idempotency-Key` header
    #[must_use]
    pub fn idempotency_key(self, key: impl Into<String>) -> Self {
        self.header("Idempotency-Key", key)
    }
}

/// Issues API requests and returns raw response bodies.
///
/// Implementations own authentication, retries and timeouts. A non-2xx
/// response must surface as an error, never as a body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the request and return the response body
    async fn issue(&self, request: &ApiRequest) -> Result<Bytes>;
}
