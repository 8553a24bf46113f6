//! Accounts
//!
//! Accounts hold balances. Money moves between accounts through transfers.

use super::shared::{CreatedAtFilter, Currency, InFilter};
use crate::client;
use crate::codec::Field;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use crate::pagination::{AutoPager, Page};
use crate::types::{JsonObject, Method};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PATH: &str = "/accounts";

crate::string_enum! {
    pub enum AccountStatus {
        Open => "open",
        Closed => "closed",
    }
}

crate::string_enum! {
    /// Partner bank holding the funds
    pub enum AccountBank {
        CoreBank => "core_bank",
        FirstInternetBank => "first_internet_bank",
        GrasshopperBank => "grasshopper_bank",
    }
}

/// A bank account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Object identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Always `account`
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub type_: Field<String>,
    /// Display name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Bank that holds the account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub bank: Field<AccountBank>,
    /// ISO 4217 currency of the amount
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Currency>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<AccountStatus>,
    /// Entity that owns the account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub entity_id: Field<String>,
    /// Entity the account is held for, when it differs from the owner
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub informational_entity_id: Field<String>,
    /// Program the account belongs to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub program_id: Field<String>,
    /// Accrued interest as a decimal string, e.g. `"0.01"`
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub interest_accrued: Field<String>,
    /// Date through which interest has accrued
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub interest_accrued_at: Field<NaiveDate>,
    /// Annual interest rate as a decimal string
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub interest_rate: Field<String>,
    /// Idempotency key the object was created with
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
    /// When the object was created
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// When the account was closed, null while open
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub closed_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Parameters for creating an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountCreateParams {
    /// Display name (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Entity that owns the account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub entity_id: Field<String>,
    /// Entity the account is held for, when it differs from the owner
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub informational_entity_id: Field<String>,
    /// Program the account belongs to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub program_id: Field<String>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Parameters for updating an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountUpdateParams {
    /// New display name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Filters for listing accounts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountListParams {
    /// Cursor from a previous page
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    /// Only accounts owned by this entity
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub entity_id: Field<String>,
    /// Only accounts held for this entity
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub informational_entity_id: Field<String>,
    /// Only accounts in this program
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub program_id: Field<String>,
    /// Only the object created with this idempotency key
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
    /// Only accounts in these statuses
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<InFilter<AccountStatus>>,
    /// Creation time range
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<CreatedAtFilter>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

crate::api_object!(
    Account,
    AccountCreateParams,
    AccountUpdateParams,
    AccountListParams
);

/// `/accounts` endpoints
#[derive(Clone)]
pub struct Accounts {
    transport: Arc<dyn Transport>,
}

impl Accounts {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create an account
    pub async fn create(&self, params: &AccountCreateParams) -> Result<Account> {
        let request = client::json_request(Method::POST, PATH, params)?;
        client::execute(self.transport.as_ref(), request).await
    }

    /// Retrieve an account by ID
    pub async fn retrieve(&self, account_id: &str) -> Result<Account> {
        let id = client::require_id("account_id", account_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::get(format!("{PATH}/{id}"))).await
    }

    /// Update an account
    pub async fn update(&self, account_id: &str, params: &AccountUpdateParams) -> Result<Account> {
        let id = client::require_id("account_id", account_id)?;
        let request = client::json_request(Method::PATCH, format!("{PATH}/{id}"), params)?;
        client::execute(self.transport.as_ref(), request).await
    }

    /// Fetch the first page of accounts
    pub async fn list(&self, params: &AccountListParams) -> Result<Page<Account>> {
        client::list(&self.transport, PATH, params).await
    }

    /// Iterate over every account matching `params`
    pub async fn list_auto_paging(&self, params: &AccountListParams) -> Result<AutoPager<Account>> {
        Ok(self.list(params).await?.into())
    }

    /// Close an account. The balance must be zero.
    pub async fn close(&self, account_id: &str) -> Result<Account> {
        let id = client::require_id("account_id", account_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::post(format!("{PATH}/{id}/close"))).await
    }
}
