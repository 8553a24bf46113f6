//! ACH Prenotifications
//!
//! Zero-dollar entries that check an account and routing number before
//! real transfers are sent.

use super::ach_transfers::StandardEntryClassCode;
use super::shared::CreatedAtFilter;
use crate::client;
use crate::codec::Field;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use crate::pagination::{AutoPager, Page};
use crate::types::{JsonObject, Method};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PATH: &str = "/ach_prenotifications";

crate::string_enum! {
    pub enum AchPrenotificationStatus {
        PendingSubmitting => "pending_submitting",
        RequiresAttention => "requires_attention",
        Returned => "returned",
        Submitted => "submitted",
    }
}

crate::string_enum! {
    /// Direction of the future transfers being announced
    pub enum CreditDebitIndicator {
        Credit => "credit",
        Debit => "debit",
    }
}

/// An ACH prenotification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchPrenotification {
    /// Object identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Always `ach_prenotification`
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub type_: Field<String>,
    /// Account number the prenotification was sent to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_number: Field<String>,
    /// Routing number the prenotification was sent to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub routing_number: Field<String>,
    /// Addendum text sent with the entry
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub addendum: Field<String>,
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
    /// Whether the prenotification is for future credits or debits
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub credit_debit_indicator: Field<CreditDebitIndicator>,
    /// Requested settlement date
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub effective_date: Field<NaiveDate>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<AchPrenotificationStatus>,
    /// Corrections sent back by the receiving bank
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub notifications_of_change: Field<Vec<NotificationOfChange>>,
    /// Set if the receiving bank returned the prenotification
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub prenotification_return: Field<PrenotificationReturn>,
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

/// Correction sent back by the receiving bank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationOfChange {
    /// e.g. `incorrect_account_number`
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub change_code: Field<String>,
    /// Corrected value supplied by the receiving bank
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub corrected_data: Field<String>,
    /// When the notification arrived
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Return of a prenotification by the receiving bank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrenotificationReturn {
    /// NACHA return reason code
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub return_reason_code: Field<String>,
    /// When the return arrived
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Parameters for creating an ACH prenotification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchPrenotificationCreateParams {
    /// Account the prenotification is sent from (required)
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Required
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_number: Field<String>,
    /// Required
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub routing_number: Field<String>,
    /// Addendum text sent with the entry
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub addendum: Field<String>,
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
    /// Whether the prenotification is for future credits or debits
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub credit_debit_indicator: Field<CreditDebitIndicator>,
    /// Requested settlement date
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub effective_date: Field<NaiveDate>,
    /// Recipient identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub individual_id: Field<String>,
    /// Recipient name
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub individual_name: Field<String>,
    /// NACHA standard entry class code
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub standard_entry_class_code: Field<StandardEntryClassCode>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Filters for listing ACH prenotifications
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchPrenotificationListParams {
    /// Cursor from a previous page
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub cursor: Field<String>,
    /// Page size, 1 to 100
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub limit: Field<i64>,
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
    AchPrenotification,
    NotificationOfChange,
    PrenotificationReturn,
    AchPrenotificationCreateParams,
    AchPrenotificationListParams,
);

/// `/ach_prenotifications` endpoints
#[derive(Clone)]
pub struct AchPrenotifications {
    transport: Arc<dyn Transport>,
}

impl AchPrenotifications {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, params: &AchPrenotificationCreateParams) -> Result<AchPrenotification> {
        let request = client::json_request(Method::POST, PATH, params)?;
        client::execute(self.transport.as_ref(), request).await
    }

    pub async fn retrieve(&self, ach_prenotification_id: &str) -> Result<AchPrenotification> {
        let id = client::require_id("ach_prenotification_id", ach_prenotification_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::get(format!("{PATH}/{id}"))).await
    }

    pub async fn list(
        &self,
        params: &AchPrenotificationListParams,
    ) -> Result<Page<AchPrenotification>> {
        client::list(&self.transport, PATH, params).await
    }

    pub async fn list_auto_paging(
        &self,
        params: &AchPrenotificationListParams,
    ) -> Result<AutoPager<AchPrenotification>> {
        Ok(self.list(params).await?.into())
    }
}
