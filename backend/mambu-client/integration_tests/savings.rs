use crate::helpers::{test_api, test_auth};

use models::RecordKind;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Updates go to the account's own path, not the collection.
///
/// **BUG THIS CATCHES**: Would catch an update silently creating a second
/// account by posting to `savings`.
#[tokio::test]
async fn given_savings_id_when_updated_then_posted_to_account_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/savings/S1"))
        .and(test_auth())
        .and(body_json(json!({
            "savingsAccount": {"name": "Rainy day", "accountType": "REGULAR_SAVINGS"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"savingsAccount": {"id": "S1"}})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let account = api
        .record_from(
            RecordKind::SavingsAccount,
            [("name", "Rainy day"), ("accountType", "REGULAR_SAVINGS")],
        )
        .unwrap();

    api.savings().update("S1", account, None).await.unwrap();
}

#[tokio::test]
async fn given_no_id_when_savings_requested_then_collection_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/savings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "S1"}, {"id": "S2"}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let accounts = api.savings().get(None, None).await.unwrap();

    assert_eq!(accounts.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn given_custom_field_when_deleted_from_savings_then_delete_sent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/savings/S1/custominformation/goal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.savings().delete_custom_field("S1", "goal").await.unwrap();
}

#[tokio::test]
async fn given_transaction_when_created_then_body_posted_to_transactions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/savings/S1/transactions"))
        .and(body_json(json!({"type": "DEPOSIT", "amount": 40, "method": "bank"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"transactionId": 77})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let deposit = api
        .record_from(
            RecordKind::SavingsTransaction,
            [
                ("type", json!("DEPOSIT")),
                ("amount", json!(40)),
                ("method", json!("bank")),
            ],
        )
        .unwrap();

    let created = api
        .savings_transactions()
        .create("S1", deposit)
        .await
        .unwrap();

    assert_eq!(created["transactionId"], 77);
}

#[tokio::test]
async fn given_transaction_id_when_fetched_then_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/savings/S1/transactions/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transactionId": 77})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let transaction = api
        .savings_transactions()
        .get_one("S1", "77")
        .await
        .unwrap();

    assert_eq!(transaction["transactionId"], 77);
}
