//! Types shared across resources

use crate::codec::Field;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::string_enum! {
    /// ISO 4217 currency code
    pub enum Currency {
        /// Canadian Dollar
        Cad => "CAD",
        /// Swiss Franc
        Chf => "CHF",
        /// Euro
        Eur => "EUR",
        /// British Pound
        Gbp => "GBP",
        /// Japanese Yen
        Jpy => "JPY",
        /// US Dollar
        Usd => "USD",
    }
}

/// Created-at range filter for list endpoints, encoded as
/// `created_at.after=...` and friends
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedAtFilter {
    /// Strictly after this instant
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub after: Field<DateTime<Utc>>,
    /// Strictly before this instant
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub before: Field<DateTime<Utc>>,
    /// At or after this instant
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub on_or_after: Field<DateTime<Utc>>,
    /// At or before this instant
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub on_or_before: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

crate::api_object!(CreatedAtFilter);

/// Set-membership filter for list endpoints, encoded as `<name>.in=a,b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InFilter<T> {
    /// Accepted values
    #[serde(rename = "in", skip_serializing_if = "Field::is_unset")]
    pub in_: Field<Vec<T>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

impl<T> Default for InFilter<T> {
    fn default() -> Self {
        Self {
            in_: Field::Unset,
            extras: JsonObject::new(),
        }
    }
}

impl<T> InFilter<T> {
    /// Match any of `values`
    pub fn any_of(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            in_: Field::Value(values.into_iter().collect()),
            extras: JsonObject::new(),
        }
    }
}

/// Approval details on transfers created with `require_approval`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferApproval {
    /// When the transfer was approved
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub approved_at: Field<DateTime<Utc>>,
    /// Email of the approving user, null for API approvals
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub approved_by: Field<String>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Cancellation details on transfers canceled before approval
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferCancellation {
    /// When the transfer was canceled
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub canceled_at: Field<DateTime<Utc>>,
    /// Email of the canceling user, null for API cancellations
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub canceled_by: Field<String>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

crate::api_object!(TransferApproval, TransferCancellation);
