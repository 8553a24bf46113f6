//! Real-Time Decisions
//!
//! Synchronous approve/decline prompts for card authorizations and digital
//! wallet provisioning. A decision must be actioned before `timeout_at`.

use super::shared::Currency;
use crate::client;
use crate::codec::Field;
use crate::error::Result;
use crate::http::{ApiRequest, Transport};
use crate::types::{JsonObject, Method};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PATH: &str = "/real_time_decisions";

crate::string_enum! {
    /// What is being decided
    pub enum RealTimeDecisionCategory {
        CardAuthorizationRequested => "card_authorization_requested",
        CardAuthenticationRequested => "card_authentication_requested",
        CardAuthenticationChallengeRequested => "card_authentication_challenge_requested",
        DigitalWalletTokenRequested => "digital_wallet_token_requested",
        DigitalWalletAuthenticationRequested => "digital_wallet_authentication_requested",
    }
}

crate::string_enum! {
    pub enum RealTimeDecisionStatus {
        /// Awaiting an action
        Pending => "pending",
        Responded => "responded",
        /// No action arrived in time; the network default applied
        TimedOut => "timed_out",
    }
}

crate::string_enum! {
    pub enum Decision {
        Approve => "approve",
        Decline => "decline",
    }
}

crate::string_enum! {
    pub enum DigitalWallet {
        ApplePay => "apple_pay",
        GooglePay => "google_pay",
        SamsungPay => "samsung_pay",
    }
}

crate::string_enum! {
    pub enum DigitalWalletAuthenticationResult {
        Success => "success",
        Failure => "failure",
    }
}

/// A request for a synchronous decision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealTimeDecision {
    /// Object identifier
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub id: Field<String>,
    /// Always `real_time_decision`
    #[serde(rename = "type", skip_serializing_if = "Field::is_unset")]
    pub type_: Field<String>,
    /// Which kind of event needs a decision
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub category: Field<RealTimeDecisionCategory>,
    /// Lifecycle status
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub status: Field<RealTimeDecisionStatus>,
    /// Present when the category is `card_authorization_requested`
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub card_authorization: Field<CardAuthorization>,
    /// Present when the category is `digital_wallet_token_requested`
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub digital_wallet_token: Field<DigitalWalletToken>,
    /// When the decision was requested
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub created_at: Field<DateTime<Utc>>,
    /// Deadline after which the default decision applies
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub timeout_at: Field<DateTime<Utc>>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Card authorization awaiting a decision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAuthorization {
    /// Account the card belongs to
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub account_id: Field<String>,
    /// Card being authorized
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub card_id: Field<String>,
    /// Null until a decision has been made
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub decision: Field<Decision>,
    /// Merchant identifier assigned by the acquirer
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub merchant_acceptor_id: Field<String>,
    /// Four-digit merchant category code
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub merchant_category_code: Field<String>,
    /// Merchant name as sent by the network
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub merchant_descriptor: Field<String>,
    /// Amount in the minor unit of the presentment currency
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub presentment_amount: Field<i64>,
    /// Currency the cardholder was charged in
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub presentment_currency: Field<Currency>,
    /// Amount in the minor unit of the settlement currency
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub settlement_amount: Field<i64>,
    /// Currency the authorization settles in
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub settlement_currency: Field<Currency>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Digital wallet provisioning awaiting a decision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalWalletToken {
    /// Card being provisioned
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub card_id: Field<String>,
    /// Decision already made, null while pending
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub decision: Field<Decision>,
    /// Wallet requesting the token
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub digital_wallet: Field<DigitalWallet>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Body of `POST /real_time_decisions/{id}/action`. Set the member
/// matching the decision's category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealTimeDecisionActionParams {
    /// Answer for a card authorization
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub card_authorization: Field<CardAuthorizationAction>,
    /// Answer for a digital wallet token request
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub digital_wallet_token: Field<DigitalWalletTokenAction>,
    /// Answer for a digital wallet authentication
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub digital_wallet_authentication: Field<DigitalWalletAuthenticationAction>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Answer to a card authorization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardAuthorizationAction {
    /// Approve or decline the authorization
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub decision: Field<Decision>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Approve by setting `approval`, decline by setting `decline`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalWalletTokenAction {
    /// Approve provisioning
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub approval: Field<DigitalWalletTokenApproval>,
    /// Decline provisioning
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub decline: Field<DigitalWalletTokenDecline>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Approve a digital wallet token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalWalletTokenApproval {
    /// Where the one-time passcode is sent
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub email: Field<String>,
    /// Phone number for the one-time passcode
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub phone: Field<String>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Decline a digital wallet token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalWalletTokenDecline {
    /// Reason shown to the cardholder
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub reason: Field<String>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

/// Answer to a digital wallet authentication
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalWalletAuthenticationAction {
    /// Whether the passcode was delivered
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub result: Field<DigitalWalletAuthenticationResult>,
    /// Keys this library does not model, kept for round trips
    #[serde(flatten)]
    pub extras: JsonObject,
}

crate::api_object!(
    RealTimeDecision,
    CardAuthorization,
    DigitalWalletToken,
    RealTimeDecisionActionParams,
    CardAuthorizationAction,
    DigitalWalletTokenAction,
    DigitalWalletTokenApproval,
    DigitalWalletTokenDecline,
    DigitalWalletAuthenticationAction,
);

impl RealTimeDecisionActionParams {
    /// Approve or decline a card authorization
    pub fn card_authorization(decision: Decision) -> Self {
        Self {
            card_authorization: Field::Value(CardAuthorizationAction {
                decision: decision.into(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// `/real_time_decisions` endpoints
#[derive(Clone)]
pub struct RealTimeDecisions {
    transport: Arc<dyn Transport>,
}

impl RealTimeDecisions {
    pub(crate) fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn retrieve(&self, real_time_decision_id: &str) -> Result<RealTimeDecision> {
        let id = client::require_id("real_time_decision_id", real_time_decision_id)?;
        client::execute(self.transport.as_ref(), ApiRequest::get(format!("{PATH}/{id}"))).await
    }

    /// Respond to a pending decision
    pub async fn action(
        &self,
        real_time_decision_id: &str,
        params: &RealTimeDecisionActionParams,
    ) -> Result<RealTimeDecision> {
        let id = client::require_id("real_time_decision_id", real_time_decision_id)?;
        let request = client::json_request(Method::POST, format!("{PATH}/{id}/action"), params)?;
        client::execute(self.transport.as_ref(), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, ApiObject};
    use serde_json::json;

    #[test]
    fn test_decode_card_authorization_decision() {
        let decision: RealTimeDecision = decode(
            br#"{
                "id": "real_time_decision_j76n2e810ezcg3zh5qtn",
                "type": "real_time_decision",
                "category": "card_authorization_requested",
                "status": "pending",
                "card_authorization": {
                    "card_id": "card_oubs0hwk5rn6knuecxg2",
                    "decision": null,
                    "presentment_amount": 100,
                    "presentment_currency": "USD",
                    "network_details": {"category": "visa"}
                },
                "digital_wallet_token": null,
                "timeout_at": "2020-01-31T23:59:59Z"
            }"#,
        )
        .unwrap();

        assert_eq!(
            decision.category.value(),
            Some(&RealTimeDecisionCategory::CardAuthorizationRequested)
        );
        let auth = decision.card_authorization.value().unwrap();
        assert!(auth.decision.is_null());
        assert_eq!(auth.presentment_currency.value(), Some(&Currency::Usd));
        assert_eq!(auth.extras["network_details"]["category"], "visa");
        assert!(decision.digital_wallet_token.is_null());
    }

    #[test]
    fn test_action_params_encode() {
        let params = RealTimeDecisionActionParams::card_authorization(Decision::Approve);
        assert_eq!(
            params.to_value().unwrap(),
            json!({"card_authorization": {"decision": "approve"}})
        );

        let params = RealTimeDecisionActionParams {
            digital_wallet_token: Field::Value(DigitalWalletTokenAction {
                decline: Field::Value(DigitalWalletTokenDecline {
                    reason: "suspected fraud".into(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            params.to_value().unwrap(),
            json!({"digital_wallet_token": {"decline": {"reason": "suspected fraud"}}})
        );
    }
}
