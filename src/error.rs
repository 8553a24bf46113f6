//! Error types for the Increase client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::codec::Field;
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for the Increase client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Codec Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to encode request: {message}")]
    Encode { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {}", api_error_summary(.detail.as_deref(), .body))]
    Api {
        status: u16,
        body: String,
        detail: Option<Box<ApiErrorBody>>,
    },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    // ============================================================================
    // Request Errors
    // ============================================================================
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an encode error
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing parameter error
    pub fn missing_param(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an API error from a status code and raw body.
    ///
    /// The body is decoded into an [`ApiErrorBody`] when it is a JSON object.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let detail = crate::codec::decode::<ApiErrorBody>(body.as_bytes())
            .ok()
            .map(Box::new);
        Self::Api {
            status,
            body,
            detail,
        }
    }

    /// HTTP status of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 409 | 429) || status >= 500
}

fn api_error_summary(detail: Option<&ApiErrorBody>, body: &str) -> String {
    match detail {
        Some(detail) => match (detail.title.value(), detail.detail.value()) {
            (Some(title), Some(text)) => format!("{title}: {text}"),
            (Some(title), None) => title.clone(),
            (None, Some(text)) => text.clone(),
            (None, None) => body.to_string(),
        },
        None => body.to_string(),
    }
}

/// Error object returned by the Increase API on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    /// Machine-readable error type, e.g. `invalid_parameters_error`
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub type_: Field<String>,
    /// Short summary
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub title: Field<String>,
    /// Longer explanation, when the API has one
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub detail: Field<String>,
    /// HTTP status repeated in the body
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<i64>,
    /// Per-parameter validation failures
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub errors: Field<Vec<serde_json::Value>>,
    /// Whether the same request may succeed later
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub retryable: Field<bool>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

crate::api_object!(ApiErrorBody);

/// Result type alias for the Increase client
pub type Result<T> = std::result::Result<T, Error>;
