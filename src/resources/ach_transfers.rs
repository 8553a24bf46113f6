//! ACH Transfers
//!
//! Transfers sent over the ACH network, with optional approval workflow.

use super::shared::{CreatedAtFilter, Currency, InFilter, TransferApproval, TransferCancellation};
use crate::client;
use crate::codec::Field;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use crate::pagination::{AutoPager, Page};
use crate::types::{JsonObject, Method};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PATH: &str = "/ach_transfers";

crate::string_enum! {
    pub enum AchTransferStatus {
        /// Waiting for approval
        PendingApproval => "pending_approval",
        Canceled => "canceled",
        PendingReviewing => "pending_reviewing",
        PendingSubmission => "pending_submission",
        Submitted => "submitted",
        Returned => "returned",
        RequiresAttention => "requires_attention",
        Rejected => "rejected",
    }
}

crate::string_enum! {
    /// Type of the receiving bank account
    pub enum AchFunding {
        Checking => "checking",
        Savings => "savings",
    }
}

crate::string_enum! {
    /// NACHA standard entry class code
    pub enum StandardEntryClassCode {
        CorporateCreditOrDebit => "corporate_credit_or_debit",
        CorporateTradeExchange => "corporate_trade_exchange",
        PrearrangedPaymentsAndDeposit => "prearranged_payments_and_deposit",
        InternetInitiated => "internet_initiated",
    }
}

/// An ACH transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchTransfer {
    /// Object identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Always `ach_transfer`
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub type_: Field<String>,
    /// Account the funds are drawn from or credited to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Destination account number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_number: Field<String>,
    /// Destination American Bankers' Association routing number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub routing_number: Field<String>,
    /// Amount in the minor unit of `currency`. Positive sends funds out.
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub amount: Field<i64>,
    /// ISO 4217 currency of the amount
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub currency: Field<Currency>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<AchTransferStatus>,
    /// Descriptor on the originating account statement
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor: Field<String>,
    /// Whether the destination is a checking or savings account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub funding: Field<AchFunding>,
    /// NACHA standard entry class code
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub standard_entry_class_code: Field<StandardEntryClassCode>,
    /// Company descriptive date shown to the recipient
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_descriptive_date: Field<String>,
    /// Company discretionary data
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_discretionary_data: Field<String>,
    /// Company entry description
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_entry_description: Field<String>,
    /// Company name shown to the recipient
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_name: Field<String>,
    /// Recipient identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub individual_id: Field<String>,
    /// Recipient name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub individual_name: Field<String>,
    /// Requested settlement date
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub effective_date: Field<NaiveDate>,
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
    pub submission: Field<AchSubmission>,
    /// Set if the receiving bank returned the transfer
    #[serde(rename = "return", skip_serializing_if = "Field::is_unset")]
    pub return_: Field<AchReturn>,
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

/// Set once the transfer has been submitted to the Federal Reserve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchSubmission {
    /// Trace number assigned on submission
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub trace_number: Field<String>,
    /// When the transfer was submitted
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub submitted_at: Field<DateTime<Utc>>,
    /// When the funds are expected to settle
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub expected_funds_settlement_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Set if the receiving bank returned the transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchReturn {
    /// Reason code, e.g. `insufficient_fund`
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub return_reason_code: Field<String>,
    /// Transaction that reversed the transfer
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub transaction_id: Field<String>,
    /// When the return arrived
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Parameters for creating an ACH transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchTransferCreateParams {
    /// Source account (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Amount in cents (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub amount: Field<i64>,
    /// Shown on the recipient's statement (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub statement_descriptor: Field<String>,
    /// Destination account number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_number: Field<String>,
    /// Destination American Bankers' Association routing number
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub routing_number: Field<String>,
    /// Alternative to `account_number` and `routing_number`
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub external_account_id: Field<String>,
    /// Whether the destination is a checking or savings account
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub funding: Field<AchFunding>,
    /// NACHA standard entry class code
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub standard_entry_class_code: Field<StandardEntryClassCode>,
    /// Company descriptive date shown to the recipient
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_descriptive_date: Field<String>,
    /// Company discretionary data
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_discretionary_data: Field<String>,
    /// Company entry description
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_entry_description: Field<String>,
    /// Company name shown to the recipient
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub company_name: Field<String>,
    /// Recipient identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub individual_id: Field<String>,
    /// Recipient name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub individual_name: Field<String>,
    /// Requested settlement date
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub effective_date: Field<NaiveDate>,
    /// Hold the transfer until it is approved
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub require_approval: Field<bool>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Filters for listing ACH transfers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchTransferListParams {
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
    /// Only transfers in these statuses
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<InFilter<AchTransferStatus>>,
    /// Creation time range
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<CreatedAtFilter>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

crate::api_object!(
    AchTransfer,
    AchSubmission,
    AchReturn,
    AchTransferCreateParams,
    AchTransferListParams,
);

/// `/ach_transfers` endpoints
#[derive(Clone)]
pub struct AchTransfers {
    transport: Arc<dyn Transport>,
}

impl AchTransfers {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create an ACH transfer
    pub async fn create(&self, params: &AchTransferCreateParams) -> Result<AchTransfer> {
        let request = client::json_request(Method::POST, PATH, params)?;
        client::execute(self.transport.as_ref(), request).await
    }

    /// Create an ACH transfer, deduplicated by `idempotency_key`
    pub async fn create_idempotent(
        &self,
        params: &AchTransferCreateParams,
        idempotency_key: &str,
    ) -> Result<AchTransfer> {
        let request =
            client::json_request(Method::POST, PATH, params)?.idempotency_key(idempotency_key);
        client::execute(self.transport.as_ref(), request).await
    }

    pub async fn retrieve(&self, ach_transfer_id: &str) -> Result<AchTransfer> {
        let id = client::require_id("ach_transfer_id", ach_transfer_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::get(format!("{PATH}/{id}"))).await
    }

    pub async fn list(&self, params: &AchTransferListParams) -> Result<Page<AchTransfer>> {
        client::list(&self.transport, PATH, params).await
    }

    pub async fn list_auto_paging(
        &self,
        params: &AchTransferListParams,
    ) -> Result<AutoPager<AchTransfer>> {
        Ok(self.list(params).await?.into())
    }

    /// Approve a transfer in `pending_approval`
    pub async fn approve(&self, ach_transfer_id: &str) -> Result<AchTransfer> {
        self.action(ach_transfer_id, "approve").await
    }

    /// Cancel a transfer in `pending_approval`
    pub async fn cancel(&self, ach_transfer_id: &str) -> Result<AchTransfer> {
        self.action(ach_transfer_id, "cancel").await
    }

    async fn action(&self, ach_transfer_id: &str, action: &str) -> Result<AchTransfer> {
        let id = client::require_id("ach_transfer_id", ach_transfer_id)?;
        let request = ApiRequest::post(format!("{PATH}/{id}/{action}"));
        client::execute(self.transport.as_ref(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, ApiObject};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_decode_returned_transfer() {
        let transfer: AchTransfer = decode(
            br#"{
                "id": "ach_transfer_uoxatyh3lt5evrsdvo7q",
                "type": "ach_transfer",
                "amount": 100,
                "currency": "USD",
                "status": "returned",
                "approval": null,
                "submission": {
                    "trace_number": "058349238292834",
                    "submitted_at": "2020-01-31T23:59:59Z"
                },
                "return": {
                    "return_reason_code": "insufficient_fund",
                    "created_at": "2020-02-01T10:00:00Z"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(transfer.amount.value(), Some(&100));
        assert_eq!(transfer.status.value(), Some(&AchTransferStatus::Returned));
        assert!(transfer.approval.is_null());
        assert!(transfer.cancellation.is_unset());
        assert_eq!(
            transfer.submission.value().unwrap().trace_number.as_deref(),
            Some("058349238292834")
        );
        assert_eq!(
            transfer.return_.value().unwrap().return_reason_code.as_deref(),
            Some("insufficient_fund")
        );

        let value = transfer.to_value().unwrap();
        assert_eq!(value["return"]["return_reason_code"], "insufficient_fund");
    }

    #[test]
    fn test_create_params_encode() {
        let params = AchTransferCreateParams {
            account_id: "account_1".into(),
            amount: 100.into(),
            statement_descriptor: "New ACH transfer".into(),
            account_number: "987654321".into(),
            routing_number: "101050001".into(),
            standard_entry_class_code: StandardEntryClassCode::CorporateCreditOrDebit.into(),
            effective_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().into(),
            require_approval: true.into(),
            ..Default::default()
        };

        assert_eq!(
            params.to_value().unwrap(),
            json!({
                "account_id": "account_1",
                "amount": 100,
                "statement_descriptor": "New ACH transfer",
                "account_number": "987654321",
                "routing_number": "101050001",
                "standard_entry_class_code": "corporate_credit_or_debit",
                "effective_date": "2024-05-01",
                "require_approval": true
            })
        );
    }
}
