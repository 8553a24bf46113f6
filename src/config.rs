//! Client configuration
//!
//! This module contains the settings used to build an [`Increase`] client,
//! either through the builder or from environment variables.
//!
//! [`Increase`]: crate::Increase

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::{BackoffType, Environment};
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "INCREASE_API_KEY";

/// Environment variable selecting `production` or `sandbox`
pub const ENVIRONMENT_ENV: &str = "INCREASE_ENVIRONMENT";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "INCREASE_BASE_URL";

// ============================================================================
// Client Config
// ============================================================================

/// Complete client configuration
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Increase API key
    pub api_key: Option<String>,
    /// Deployment to target
    pub environment: Environment,
    /// Explicit base URL; takes precedence over `environment`
    pub base_url: Option<String>,
    /// Transport tuning (timeouts, retries, rate limiting)
    pub http: HttpClientConfig,
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Build a config from `INCREASE_API_KEY`, `INCREASE_ENVIRONMENT` and
    /// `INCREASE_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.is_empty()) {
            builder = builder.api_key(key);
        }
        if let Some(env) = lookup(ENVIRONMENT_ENV).filter(|e| !e.is_empty()) {
            builder = builder.environment(env.parse()?);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.is_empty()) {
            builder = builder.base_url(url);
        }

        Ok(builder.build())
    }

    /// Base URL requests are sent to
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        match self.api_key.as_deref() {
            None | Some("") => return Err(Error::missing_field("api_key")),
            Some(_) => {}
        }

        let base = self.resolved_base_url();
        let url = url::Url::parse(base)
            .map_err(|e| Error::invalid_config("base_url", format!("'{base}': {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_config(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        Ok(())
    }

    /// Transport configuration with the base URL and API key applied
    pub fn http_config(&self) -> HttpClientConfig {
        let mut http = self.http.clone();
        http.base_url = self.resolved_base_url().to_string();
        http.api_key.clone_from(&self.api_key);
        http
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Select the environment
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Shorthand for the sandbox environment
    pub fn sandbox(self) -> Self {
        self.environment(Environment::Sandbox)
    }

    /// Override the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.http.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.http.backoff_type = backoff_type;
        self.config.http.initial_backoff = initial;
        self.config.http.max_backoff = max;
        self
    }

    /// Enable client-side rate limiting
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.http.rate_limit = Some(config);
        self
    }

    /// Add a header sent with every request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .http
            .default_headers
            .insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.http.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
