//! Integration tests using mock HTTP server
//!
//! Tests the full flow: params → query/JSON body → HTTP → decoded objects
//! and pages.

use futures::TryStreamExt;
use increase::resources::{
    AccountCreateParams, AccountNumberListParams, AccountNumberStatus, AccountStatus,
    AchTransferCreateParams, AchTransferStatus, CreatedAtFilter, Decision, InFilter,
    RealTimeDecisionActionParams, WireTransferStatus,
};
use increase::{ApiObject, ClientConfig, Error, Field, Increase, PageState};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> Increase {
    let config = ClientConfig::builder()
        .api_key("test_api_key")
        .base_url(server.uri())
        .max_retries(0)
        .timeout(Duration::from_secs(5))
        .build();
    Increase::new(config).unwrap()
}

fn account_number(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": "account_number",
        "account_id": "account_in71c4amph0vgo2qllky",
        "status": "active",
        "created_at": "2020-01-31T23:59:59Z"
    })
}

// ============================================================================
// Object round trips over HTTP
// ============================================================================

#[tokio::test]
async fn test_retrieve_account_number() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account_numbers/acct_123"))
        .and(header("Authorization", "Bearer test_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "acct_123",
            "status": "active",
            "unknown_field": "x"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let number = client_for(&server)
        .account_numbers()
        .retrieve("acct_123")
        .await
        .unwrap();

    assert_eq!(number.id.as_deref(), Some("acct_123"));
    assert_eq!(number.status.value(), Some(&AccountNumberStatus::Active));
    assert_eq!(
        String::from_utf8(number.to_json().unwrap()).unwrap(),
        r#"{"id":"acct_123","status":"active","unknown_field":"x"}"#
    );
}

#[tokio::test]
async fn test_create_account_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Payroll", "entity_id": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "account_1",
            "type": "account",
            "name": "Payroll",
            "status": "open",
            "entity_id": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = AccountCreateParams {
        name: "Payroll".into(),
        entity_id: Field::Null,
        ..Default::default()
    };
    let account = client_for(&server)
        .accounts()
        .create(&params)
        .await
        .unwrap();

    assert_eq!(account.id.as_deref(), Some("account_1"));
    assert!(account.entity_id.is_null());
    assert!(account.program_id.is_unset());
}

#[tokio::test]
async fn test_close_account() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts/account_1/close"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "account_1", "status": "closed"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let account = client_for(&server)
        .accounts()
        .close("account_1")
        .await
        .unwrap();
    assert_eq!(account.status.value(), Some(&AccountStatus::Closed));
}

#[tokio::test]
async fn test_ach_transfer_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ach_transfers"))
        .and(header("Idempotency-Key", "transfer-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ach_transfer_1",
            "amount": 100,
            "status": "pending_approval"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/ach_transfers/ach_transfer_1/approve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ach_transfer_1",
            "amount": 100,
            "status": "pending_submission",
            "approval": {"approved_at": "2020-01-31T23:59:59Z", "approved_by": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transfers = client_for(&server).ach_transfers();
    let params = AchTransferCreateParams {
        account_id: "account_1".into(),
        amount: 100.into(),
        statement_descriptor: "Invoice 42".into(),
        require_approval: true.into(),
        ..Default::default()
    };

    let created = transfers
        .create_idempotent(&params, "transfer-1")
        .await
        .unwrap();
    assert_eq!(
        created.status.value(),
        Some(&AchTransferStatus::PendingApproval)
    );

    let approved = transfers.approve("ach_transfer_1").await.unwrap();
    assert_eq!(
        approved.status.value(),
        Some(&AchTransferStatus::PendingSubmission)
    );
    assert!(approved.approval.value().unwrap().approved_by.is_null());
}

#[tokio::test]
async fn test_cancel_wire_transfer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wire_transfers/wire_1/cancel"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "wire_1", "status": "canceled"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let wire = client_for(&server)
        .wire_transfers()
        .cancel("wire_1")
        .await
        .unwrap();
    assert_eq!(wire.status.value(), Some(&WireTransferStatus::Canceled));
}

#[tokio::test]
async fn test_real_time_decision_action() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/real_time_decisions/rtd_1/action"))
        .and(body_json(json!({"card_authorization": {"decision": "decline"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rtd_1",
            "status": "responded",
            "card_authorization": {"decision": "decline"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let decision = client_for(&server)
        .real_time_decisions()
        .action(
            "rtd_1",
            &RealTimeDecisionActionParams::card_authorization(Decision::Decline),
        )
        .await
        .unwrap();

    let auth = decision.card_authorization.value().unwrap();
    assert_eq!(auth.decision.value(), Some(&Decision::Decline));
}

// ============================================================================
// Pagination over HTTP
// ============================================================================

/// Mounts three pages: no cursor → c1 → c2 → end
async fn mount_three_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/account_numbers"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [account_number("an_1"), account_number("an_2")],
            "next_cursor": "c1"
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account_numbers"))
        .and(query_param("limit", "2"))
        .and(query_param("cursor", "c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [account_number("an_3"), account_number("an_4")],
            "next_cursor": "c2"
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account_numbers"))
        .and(query_param("cursor", "c2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [account_number("an_5")],
            "next_cursor": null
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn two_per_page() -> AccountNumberListParams {
    AccountNumberListParams {
        limit: 2.into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_page_state_walk() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let first = client_for(&server)
        .account_numbers()
        .list(&two_per_page())
        .await
        .unwrap();

    let mut state = PageState::from(first);
    let mut sizes = Vec::new();
    while let Some(page) = state.page() {
        sizes.push(page.items().len());
        state = state.next_page().await.unwrap();
    }

    assert_eq!(sizes, vec![2, 2, 1]);
    assert!(state.next_page().await.unwrap().is_exhausted());
}

#[tokio::test]
async fn test_auto_paging_collects_every_item() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let numbers = client_for(&server)
        .account_numbers()
        .list_auto_paging(&two_per_page())
        .await
        .unwrap()
        .collect_all()
        .await
        .unwrap();

    let ids: Vec<_> = numbers.iter().filter_map(|n| n.id.as_deref()).collect();
    assert_eq!(ids, vec!["an_1", "an_2", "an_3", "an_4", "an_5"]);
}

#[tokio::test]
async fn test_auto_paging_stream() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let count = client_for(&server)
        .account_numbers()
        .list_auto_paging(&two_per_page())
        .await
        .unwrap()
        .into_stream()
        .try_fold(0usize, |count, _| async move { Ok(count + 1) })
        .await
        .unwrap();
    assert_eq!(count, 5);
}

#[tokio::test]
async fn test_list_filters_are_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account_numbers"))
        .and(query_param("status.in", "active,disabled"))
        .and(query_param("created_at.on_or_after", "2024-01-01T00:00:00Z"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [], "next_cursor": null})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = AccountNumberListParams {
        status: InFilter::any_of([AccountNumberStatus::Active, AccountNumberStatus::Disabled])
            .into(),
        created_at: Field::Value(CreatedAtFilter {
            on_or_after: "2024-01-01T00:00:00Z".parse::<chrono::DateTime<chrono::Utc>>()
                .unwrap()
                .into(),
            ..Default::default()
        }),
        ..Default::default()
    };
    let page = client_for(&server)
        .account_numbers()
        .list(&params)
        .await
        .unwrap();

    assert!(page.items().is_empty());
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn test_page_fetch_error_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account_numbers"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [account_number("an_1")],
            "next_cursor": "c1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account_numbers"))
        .and(query_param("cursor", "c1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "invalid_parameters_error",
            "title": "Invalid cursor.",
            "status": 400
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .account_numbers()
        .list(&AccountNumberListParams::default())
        .await
        .unwrap();

    let err = page.next_page().await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(!err.is_retryable());
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_not_found_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wire_transfers/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "not_found_error",
            "title": "The requested object was not found.",
            "status": 404
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .wire_transfers()
        .retrieve("missing")
        .await
        .unwrap_err();

    let Error::Api { status, detail, .. } = err else {
        panic!("Expected Api error, got {err:?}");
    };
    assert_eq!(status, 404);
    assert_eq!(
        detail.unwrap().type_.as_deref(),
        Some("not_found_error")
    );
}

#[tokio::test]
async fn test_empty_id_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .ach_transfers()
        .approve("")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingParameter { ref name } if name == "ach_transfer_id"));
}

#[tokio::test]
async fn test_id_with_query_string_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(account_number("acct_1")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .account_numbers()
        .retrieve("abc?status.in=canceled")
        .await
        .unwrap_err();
    assert!(
        matches!(err, Error::InvalidParameter { ref name, .. } if name == "account_number_id")
    );
}

#[tokio::test]
async fn test_id_with_parent_segments_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "acct_9"})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .accounts()
        .retrieve("../accounts/acct_9")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "account_id"));
}

#[tokio::test]
async fn test_non_object_response_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/account_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .accounts()
        .retrieve("account_1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[tokio::test]
async fn test_custom_headers_are_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/account_1"))
        .and(header("Increase-Version", "2024-01-01"))
        .respond_with(move |request: &Request| {
            let agent = request
                .headers
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            ResponseTemplate::new(200).set_body_json(json!({"id": "account_1", "agent": agent}))
        })
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .api_key("test_api_key")
        .base_url(server.uri())
        .header("Increase-Version", "2024-01-01")
        .build();
    let account = Increase::new(config)
        .unwrap()
        .accounts()
        .retrieve("account_1")
        .await
        .unwrap();

    let agent = account.extras["agent"].as_str().unwrap();
    assert!(agent.starts_with("increase-rust/"));
}
