//! Account Numbers
//!
//! Each account can have any number of account numbers. Inbound ACH and
//! check deposits are routed by account number.

use super::shared::{CreatedAtFilter, InFilter};
use crate::client;
use crate::codec::Field;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use crate::pagination::{AutoPager, Page};
use crate::types::{JsonObject, Method};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PATH: &str = "/account_numbers";

crate::string_enum! {
    /// Whether an account number can receive funds
    pub enum AccountNumberStatus {
        Active => "active",
        Disabled => "disabled",
        /// Permanently closed
        Canceled => "canceled",
    }
}

crate::string_enum! {
    /// Whether ACH debits against the number are accepted
    pub enum AchDebitStatus {
        Allowed => "allowed",
        Blocked => "blocked",
    }
}

crate::string_enum! {
    /// Which inbound checks are accepted
    pub enum InboundChecksStatus {
        Allowed => "allowed",
        /// Only checks printed through Increase check transfers
        CheckTransfersOnly => "check_transfers_only",
    }
}

/// An account number and its routing settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountNumber {
    /// Object identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Always `account_number`
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub type_: Field<String>,
    /// Account the object belongs to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// The account number itself
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_number: Field<String>,
    /// Routing number paired with the account number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub routing_number: Field<String>,
    /// Name chosen when the number was created
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<AccountNumberStatus>,
    /// When the object was created
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Idempotency key the object was created with
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
    /// Inbound ACH settings
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inbound_ach: Field<InboundAch>,
    /// Inbound check settings
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inbound_checks: Field<InboundChecks>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Inbound ACH settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundAch {
    /// Whether inbound ACH debits are allowed
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub debit_status: Field<AchDebitStatus>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Inbound check settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InboundChecks {
    /// Whether checks can be deposited to this number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<InboundChecksStatus>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Parameters for creating an account number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountNumberCreateParams {
    /// Account the number routes to (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Display name (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Inbound ACH settings
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inbound_ach: Field<InboundAch>,
    /// Inbound check settings
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inbound_checks: Field<InboundChecks>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Parameters for updating an account number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountNumberUpdateParams {
    /// New display name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// New status; `disabled` and `canceled` stop inbound payments
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<AccountNumberStatus>,
    /// Inbound ACH settings
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inbound_ach: Field<InboundAch>,
    /// Inbound check settings
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub inbound_checks: Field<InboundChecks>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Filters for listing account numbers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountNumberListParams {
    /// Cursor from a previous page
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    /// Only numbers on this account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Only numbers in these statuses
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<InFilter<AccountNumberStatus>>,
    /// Only numbers with these inbound ACH debit settings
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub ach_debit_status: Field<InFilter<AchDebitStatus>>,
    /// Only the object created with this idempotency key
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
    /// Creation time range
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<CreatedAtFilter>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

crate::api_object!(
    AccountNumber,
    InboundAch,
    InboundChecks,
    AccountNumberCreateParams,
    AccountNumberUpdateParams,
    AccountNumberListParams,
);

/// `/account_numbers` endpoints
#[derive(Clone)]
pub struct AccountNumbers {
    transport: Arc<dyn Transport>,
}

impl AccountNumbers {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create an account number
    pub async fn create(&self, params: &AccountNumberCreateParams) -> Result<AccountNumber> {
        let request = client::json_request(Method::POST, PATH, params)?;
        client::execute(self.transport.as_ref(), request).await
    }

    /// Retrieve an account number by ID
    pub async fn retrieve(&self, account_number_id: &str) -> Result<AccountNumber> {
        let id = client::require_id("account_number_id", account_number_id)?;
        let request = ApiRequest::get(format!("{PATH}/{id}"));
        client::execute(self.transport.as_ref(), request).await
    }

    /// Update an account number
    pub async fn update(
        &self,
        account_number_id: &str,
        params: &AccountNumberUpdateParams,
    ) -> Result<AccountNumber> {
        let id = client::require_id("account_number_id", account_number_id)?;
        let request = client::json_request(Method::PATCH, format!("{PATH}/{id}"), params)?;
        client::execute(self.transport.as_ref(), request).await
    }

    /// Fetch the first page of account numbers
    pub async fn list(&self, params: &AccountNumberListParams) -> Result<Page<AccountNumber>> {
        client::list(&self.transport, PATH, params).await
    }

    /// Iterate over every account number matching `params`
    pub async fn list_auto_paging(
        &self,
        params: &AccountNumberListParams,
    ) -> Result<AutoPager<AccountNumber>> {
        Ok(self.list(params).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, ApiObject};
    use crate::query::to_query;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_keeps_unknown_fields() {
        let number: AccountNumber =
            decode(br#"{"id":"acct_123","status":"active","unknown_field":"x"}"#).unwrap();

        assert_eq!(number.id.as_deref(), Some("acct_123"));
        assert_eq!(number.status.value(), Some(&AccountNumberStatus::Active));
        assert!(number.name.is_unset());

        let encoded = number.to_value().unwrap();
        assert_eq!(
            encoded,
            json!({"id": "acct_123", "status": "active", "unknown_field": "x"})
        );
    }

    #[test]
    fn test_decode_full_object() {
        let body = json!({
            "id": "account_number_v18nkfqm6afpsrvy82b2",
            "type": "account_number",
            "account_id": "account_in71c4amph0vgo2qllky",
            "account_number": "987654321",
            "routing_number": "101050001",
            "name": "ACME Co. payroll",
            "status": "active",
            "created_at": "2020-01-31T23:59:59Z",
            "idempotency_key": null,
            "inbound_ach": {"debit_status": "blocked"},
            "inbound_checks": {"status": "check_transfers_only"}
        });
        let number: AccountNumber = decode(body.to_string().as_bytes()).unwrap();

        assert_eq!(number.type_.as_deref(), Some("account_number"));
        assert!(number.idempotency_key.is_null());
        assert_eq!(
            number.inbound_ach.value().unwrap().debit_status.value(),
            Some(&AchDebitStatus::Blocked)
        );
        assert_eq!(
            number.inbound_checks.value().unwrap().status.value(),
            Some(&InboundChecksStatus::CheckTransfersOnly)
        );
        assert!(number.extras.is_empty());

        // Re-encodes to the same document
        assert_eq!(number.to_value().unwrap(), body);
    }

    #[test]
    fn test_unknown_status_survives() {
        let number: AccountNumber = decode(br#"{"status":"frozen"}"#).unwrap();
        let status = number.status.value().unwrap();
        assert!(!status.is_known());
        assert_eq!(number.to_value().unwrap(), json!({"status": "frozen"}));
    }

    #[test]
    fn test_update_params_can_clear_name() {
        let params = AccountNumberUpdateParams {
            name: Field::Null,
            status: AccountNumberStatus::Disabled.into(),
            ..Default::default()
        };
        assert_eq!(
            params.to_value().unwrap(),
            json!({"name": null, "status": "disabled"})
        );
    }

    #[test]
    fn test_list_params_query() {
        let params = AccountNumberListParams {
            limit: 10.into(),
            account_id: "account_1".into(),
            status: InFilter::any_of([AccountNumberStatus::Active, AccountNumberStatus::Disabled])
                .into(),
            ..Default::default()
        };
        assert_eq!(
            to_query(&params).unwrap(),
            vec![
                ("limit".to_string(), "10".to_string()),
                ("account_id".to_string(), "account_1".to_string()),
                ("status.in".to_string(), "active,disabled".to_string()),
            ]
        );
    }
}
