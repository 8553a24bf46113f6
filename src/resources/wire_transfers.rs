//! Wire Transfers
//!
//! Same-day transfers over Fedwire.

use super::shared::{CreatedAtFilter, Currency, TransferApproval, TransferCancellation};
use crate::client;
use crate::codec::Field;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use crate::pagination::{AutoPager, Page};
use crate::types::{JsonObject, Method};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PATH: &str = "/wire_transfers";

crate::string_enum! {
    pub enum WireTransferStatus {
        PendingApproval => "pending_approval",
        Canceled => "canceled",
        PendingReviewing => "pending_reviewing",
        Rejected => "rejected",
        RequiresAttention => "requires_attention",
        PendingCreating => "pending_creating",
        /// Returned by the receiving bank
        Reversed => "reversed",
        Submitted => "submitted",
        Complete => "complete",
    }
}

/// A wire transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireTransfer {
    /// Object identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Always `wire_transfer`
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub type_: Field<String>,
    /// Account the funds are drawn from
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Destination account number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_number: Field<String>,
    /// Destination American Bankers' Association routing number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub routing_number: Field<String>,
    /// Amount in cents
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub amount: Field<i64>,
    /// ISO 4217 currency of the amount
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Currency>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<WireTransferStatus>,
    /// Name of the receiving party
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_name: Field<String>,
    /// First line of the beneficiary address
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_address_line1: Field<String>,
    /// Second line of the beneficiary address
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_address_line2: Field<String>,
    /// Third line of the beneficiary address
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_address_line3: Field<String>,
    /// Message sent with the wire
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub message_to_recipient: Field<String>,
    /// Saved external account used as the destination
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_account_id: Field<String>,
    /// Set once the transfer is approved
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub approval: Field<TransferApproval>,
    /// Set once the transfer is canceled
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub cancellation: Field<TransferCancellation>,
    /// Set once the transfer is submitted to the network
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub submission: Field<WireSubmission>,
    /// Set if the wire was reversed
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub reversal: Field<WireReversal>,
    /// Pending transaction held while the transfer settles
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub pending_transaction_id: Field<String>,
    /// Transaction created when the transfer settled
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub transaction_id: Field<String>,
    /// Idempotency key the object was created with
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub idempotency_key: Field<String>,
    /// When the object was created
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Fedwire submission details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireSubmission {
    /// Federal Reserve IMAD of the outgoing message
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub input_message_accountability_data: Field<String>,
    /// When the wire was submitted to Fedwire
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub submitted_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Reversal of a sent wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireReversal {
    /// Reversed amount in the minor unit of the currency
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub amount: Field<i64>,
    /// Reason given by the sending bank
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    /// Fedwire IMAD of the reversal
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub input_message_accountability_data: Field<String>,
    /// Transaction that returned the funds
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub transaction_id: Field<String>,
    /// When the reversal arrived
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Parameters for creating a wire transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireTransferCreateParams {
    /// Source account (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Amount in cents (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub amount: Field<i64>,
    /// Required
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_name: Field<String>,
    /// Required
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub message_to_recipient: Field<String>,
    /// Destination account number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_number: Field<String>,
    /// Destination American Bankers' Association routing number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub routing_number: Field<String>,
    /// Saved external account used as the destination
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_account_id: Field<String>,
    /// First line of the beneficiary address
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_address_line1: Field<String>,
    /// Second line of the beneficiary address
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_address_line2: Field<String>,
    /// Third line of the beneficiary address
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub beneficiary_address_line3: Field<String>,
    /// Originator name, defaults to the account name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub originator_name: Field<String>,
    /// Hold the transfer until it is approved
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub require_approval: Field<bool>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Filters for listing wire transfers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireTransferListParams {
    /// Cursor from a previous page
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
    /// Only transfers from this account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Only transfers to this external account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_account_id: Field<String>,
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
    WireTransfer,
    WireSubmission,
    WireReversal,
    WireTransferCreateParams,
    WireTransferListParams,
);

/// `/wire_transfers` endpoints
#[derive(Clone)]
pub struct WireTransfers {
    transport: Arc<dyn Transport>,
}

impl WireTransfers {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &WireTransferCreateParams) -> Result<WireTransfer> {
        let request = client::json_request(Method::POST, PATH, params)?;
        client::execute(self.transport.as_ref(), request).await
    }

    pub async fn retrieve(&self, wire_transfer_id: &str) -> Result<WireTransfer> {
        let id = client::require_id("wire_transfer_id", wire_transfer_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::get(format!("{PATH}/{id}"))).await
    }

    pub async fn list(&self, params: &WireTransferListParams) -> Result<Page<WireTransfer>> {
        client::list(&self.transport, PATH, params).await
    }

    pub async fn list_auto_paging(
        &self,
        params: &WireTransferListParams,
    ) -> Result<AutoPager<WireTransfer>> {
        Ok(self.list(params).await?.into())
    }

    /// Approve a transfer in `pending_approval`
    pub async fn approve(&self, wire_transfer_id: &str) -> Result<WireTransfer> {
        let id = client::require_id("wire_transfer_id", wire_transfer_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::post(format!("{PATH}/{id}/approve"))).await
    }

    /// Cancel a transfer in `pending_approval`
    pub async fn cancel(&self, wire_transfer_id: &str) -> Result<WireTransfer> {
        let id = client::require_id("wire_transfer_id", wire_transfer_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::post(format!("{PATH}/{id}/cancel"))).await
    }
}
