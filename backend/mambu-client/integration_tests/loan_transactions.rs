use crate::helpers::test_api;

use mambu_client::{DateLike, MambuClientError};
use models::{ModelError, RecordKind};

use chrono::{Duration, Local};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRANSACTIONS_PATH: &str = "/api/loans/L1/transactions";

async fn mount_transaction(server: &MockServer, expected: Value, times: u64) {
    Mock::given(method("POST"))
        .and(path(TRANSACTIONS_PATH))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"encodedKey": "tx"})))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_state_transitions_when_dispatched_then_type_only_payloads() {
    let server = MockServer::start().await;
    for code in ["APPROVAL", "UNDO_APPROVAL", "WITHDRAW", "REJECT", "LOCK", "UNLOCK"] {
        mount_transaction(&server, json!({"type": code}), 1).await;
    }
    let api = test_api(&server);
    let transactions = api.loan_transactions();

    transactions.approve("L1").await.unwrap();
    transactions.undo_approval("L1").await.unwrap();
    transactions.withdraw("L1").await.unwrap();
    transactions.reject("L1").await.unwrap();
    transactions.lock("L1").await.unwrap();
    transactions.unlock("L1").await.unwrap();
}

#[tokio::test]
async fn given_transition_refused_when_approving_then_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSACTIONS_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(
            json!({"returnCode": 1009, "returnStatus": "INVALID_ACCOUNT_STATE"}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let error = api.loan_transactions().approve("L1").await.unwrap_err();

    assert_eq!(error.return_code(), Some(1009));
}

/// **VALUE**: Today's date is left out of the fee payload on the wire.
#[tokio::test]
async fn given_today_when_fee_applied_then_no_date_sent() {
    let server = MockServer::start().await;
    mount_transaction(&server, json!({"type": "FEE", "amount": 10.0}), 1).await;
    let api = test_api(&server);
    let today = DateLike::from(Local::now().date_naive());

    api.loan_transactions()
        .apply_fee("L1", 10.0, Some(today))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_past_date_when_fee_applied_then_date_sent() {
    let server = MockServer::start().await;
    mount_transaction(
        &server,
        json!({"type": "FEE", "amount": 2.5, "date": "2019-05-01"}),
        1,
    )
    .await;
    let api = test_api(&server);

    api.loan_transactions()
        .apply_fee("L1", 2.5, Some(DateLike::from("2019-05-01")))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_optional_parts_when_repayment_posted_then_only_supplied_parts_sent() {
    let server = MockServer::start().await;
    mount_transaction(
        &server,
        json!({"type": "REPAYMENT", "amount": 150.0, "method": "CASH"}),
        1,
    )
    .await;
    let api = test_api(&server);

    api.loan_transactions()
        .repayment("L1", 150.0, None, Some("CASH"), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn given_disbursement_when_undone_then_adjustment_posted() {
    let server = MockServer::start().await;
    mount_transaction(&server, json!({"type": "DISBURSMENT_ADJUSTMENT"}), 1).await;
    let api = test_api(&server);

    api.loan_transactions().undo_disburse("L1").await.unwrap();
}

/// **VALUE**: Disbursement goes out before the fee and both responses come
/// back in that order.
///
/// **BUG THIS CATCHES**: Would catch the two calls being issued
/// concurrently, which lets the fee land on an undisbursed loan.
#[tokio::test]
async fn given_future_date_when_disbursed_with_fee_then_disbursement_then_fee() {
    let server = MockServer::start().await;
    let date = (Local::now().date_naive() + Duration::days(3))
        .format("%Y-%m-%d")
        .to_string();
    mount_transaction(&server, json!({"type": "DISBURSMENT", "date": date}), 1).await;
    mount_transaction(&server, json!({"type": "FEE", "amount": 30.0, "date": date}), 1).await;
    let api = test_api(&server);

    let responses = api
        .loan_transactions()
        .disburse_with_fee("L1", 30.0, Some(DateLike::from(date.clone())))
        .await
        .unwrap();

    assert_eq!(responses.len(), 2);
    let received = server.received_requests().await.unwrap();
    let types: Vec<Value> = received
        .iter()
        .map(|request| request.body_json::<Value>().unwrap()["type"].clone())
        .collect();
    assert_eq!(types, vec![json!("DISBURSMENT"), json!("FEE")]);
}

#[tokio::test]
async fn given_client_record_when_posted_as_transaction_then_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let client = api.record(RecordKind::Client);

    let result = api.loan_transactions().post("L1", client).await;

    assert!(matches!(
        result,
        Err(MambuClientError::Model(ModelError::KindMismatch { .. }))
    ));
}
