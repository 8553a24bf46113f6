//! Client facade
//!
//! [`Increase`] owns the transport and hands out one service per resource.
//! The helpers at the bottom are shared by every service.

use crate::codec::{self, ApiObject};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{ApiRequest, HttpClient, Transport};
use crate::pagination::Page;
use crate::query;
use crate::resources::{
    AccountNumbers, Accounts, AchPrenotifications, AchTransfers, RealTimeDecisions,
    WireTransfers,
};
use crate::types::Method;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Entry point for the Increase API.
///
/// ```rust,ignore
/// let client = Increase::from_env()?;
/// let number = client.account_numbers().retrieve("account_number_123").await?;
/// ```
#[derive(Clone)]
pub struct Increase {
    transport: Arc<dyn Transport>,
}

impl Increase {
    /// Build a client backed by [`HttpClient`]
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.http_config())?;
        debug!("Created Increase client for {}", config.resolved_base_url());
        Ok(Self::with_transport(Arc::new(http)))
    }

    /// Build a client from `INCREASE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Build a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The underlying transport
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn accounts(&self) -> Accounts {
        Accounts::new(Arc::clone(&self.transport))
    }

    pub fn account_numbers(&self) -> AccountNumbers {
        AccountNumbers::new(Arc::clone(&self.transport))
    }

    pub fn ach_prenotifications(&self) -> AchPrenotifications {
        AchPrenotifications::new(Arc::clone(&self.transport))
    }

    pub fn ach_transfers(&self) -> AchTransfers {
        AchTransfers::new(Arc::clone(&self.transport))
    }

    pub fn wire_transfers(&self) -> WireTransfers {
        WireTransfers::new(Arc::clone(&self.transport))
    }

    pub fn real_time_decisions(&self) -> RealTimeDecisions {
        RealTimeDecisions::new(Arc::clone(&self.transport))
    }
}

impl std::fmt::Debug for Increase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Increase").finish_non_exhaustive()
    }
}

// ============================================================================
// Shared service helpers
// ============================================================================

/// Issue a request and decode the response object
pub(crate) async fn execute<T: ApiObject>(transport: &dyn Transport, request: ApiRequest) -> Result<T> {
    let body = transport.issue(&request).await?;
    codec::decode(&body)
}

/// Build a request carrying `params` as its JSON body
pub(crate) fn json_request<P: ApiObject>(
    method: Method,
    path: impl Into<String>,
    params: &P,
) -> Result<ApiRequest> {
    Ok(ApiRequest::new(method, path).with_body(codec::encode(params)?))
}

/// Fetch the first page of a list endpoint
pub(crate) async fn list<T, P>(transport: &Arc<dyn Transport>, path: &str, params: &P) -> Result<Page<T>>
where
    T: ApiObject + Send,
    P: Serialize,
{
    let request = ApiRequest::get(path).with_query(query::to_query(params)?);
    Page::first(Arc::clone(transport), request).await
}

/// Check a path identifier before any request is made.
///
/// Object IDs are ASCII letters, digits, `_` and `-`. Anything else could
/// change the request path or smuggle in a query string, so it is rejected.
pub(crate) fn require_id<'a>(name: &str, id: &'a str) -> Result<&'a str> {
    if id.trim().is_empty() {
        return Err(Error::missing_param(name));
    }
    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-')))
    {
        return Err(Error::invalid_param(
            name,
            format!("unexpected character {c:?} in {id:?}"),
        ));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Environment;
    use test_case::test_case;

    #[test]
    fn test_new_requires_api_key() {
        let err = Increase::new(ClientConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_new_with_config() {
        let config = ClientConfig::builder()
            .api_key("test_key")
            .environment(Environment::Sandbox)
            .build();
        let client = Increase::new(config).unwrap();
        assert_eq!(format!("{client:?}"), "Increase { .. }");
    }

    #[test]
    fn test_require_id() {
        assert_eq!(require_id("account_id", "account_1").unwrap(), "account_1");
        assert!(matches!(
            require_id("account_id", "").unwrap_err(),
            Error::MissingParameter { ref name } if name == "account_id"
        ));
        assert!(require_id("account_id", "  ").is_err());
    }

    #[test_case("abc?status.in=canceled" ; "query string")]
    #[test_case("../accounts/acct_9" ; "parent traversal")]
    #[test_case("acct_1/close" ; "extra segment")]
    #[test_case("acct_1#frag" ; "fragment")]
    #[test_case("acct%2F1" ; "percent escape")]
    #[test_case("acct 1" ; "inner space")]
    fn test_require_id_rejects_path_characters(id: &str) {
        assert!(matches!(
            require_id("account_id", id).unwrap_err(),
            Error::InvalidParameter { ref name, .. } if name == "account_id"
        ));
    }

    #[test]
    fn test_require_id_accepts_generated_ids() {
        for id in ["account_in71c4amph0vgo2qllky", "sandbox_object-1", "ACH_1"] {
            assert_eq!(require_id("account_id", id).unwrap(), id);
        }
    }
}
