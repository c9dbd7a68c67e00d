use crate::helpers::{test_api, test_auth};

use models::RecordKind;

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_client_id_when_loans_for_client_requested_then_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clients/C1/loans"))
        .and(query_param("accountState", "ACTIVE"))
        .and(test_auth())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "L1"}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let params = api
        .record_from(RecordKind::LoanQuery, [("accountState", "ACTIVE")])
        .unwrap();

    let loans = api
        .loans()
        .get_for_client(Some("C1"), Some(&params))
        .await
        .unwrap();

    assert_eq!(loans, json!([{"id": "L1"}]));
}

#[tokio::test]
async fn given_no_group_id_when_loans_for_group_requested_then_bare_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.loans().get_for_group(None, None).await.unwrap();
}

/// **VALUE**: An empty identifier is the same as no identifier.
///
/// **BUG THIS CATCHES**: Emitting the parent collection for `Some("")`
/// and requesting `clients/loans` or `groups/loans`.
#[tokio::test]
async fn given_empty_parent_id_when_loans_requested_then_bare_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.loans().get_for_client(Some(""), None).await.unwrap();
    api.loans().get_for_group(Some(""), None).await.unwrap();
}

#[tokio::test]
async fn given_plain_json_loan_when_created_then_wrapped_as_loan_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/loans"))
        .and(body_json(json!({
            "loanAccount": {"loanAmount": 1000, "productTypeKey": "8a1"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"loanAccount": {"id": "L7"}})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let created = api
        .loans()
        .create(json!({"loanAmount": 1000, "productTypeKey": "8a1"}), None)
        .await
        .unwrap();

    assert_eq!(created["loanAccount"]["id"], "L7");
}

#[tokio::test]
async fn given_loan_id_when_deleted_then_delete_request() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/loans/L1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.loans().delete("L1").await.unwrap();
}

#[tokio::test]
async fn given_loan_id_when_transactions_requested_then_statement_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loans/L1/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"transactionId": 1}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let statement = api.loans().get_transactions("L1").await.unwrap();

    assert_eq!(statement[0]["transactionId"], 1);
}

/// **VALUE**: Date filters reach the search endpoint as platform dates,
/// with unused constraint parts left out.
#[tokio::test]
async fn given_date_when_principals_due_on_then_search_posted_with_on_filter() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/loans/search"))
        .and(body_json(json!({
            "filterConstraints": [{
                "filterSelection": "EXPECTED_MATURITY_DATE",
                "filterElement": "ON",
                "value": "2024-06-30"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.loans()
        .principals_due_on(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn given_today_filter_when_repayments_due_today_then_today_element_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/loans/search"))
        .and(body_json(json!({
            "filterConstraints": [{
                "filterSelection": "FIRST_REPAYMENT_DATE",
                "filterElement": "TODAY"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "L3"}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let due = api.loans().repayments_due_today().await.unwrap();

    assert_eq!(due[0]["id"], "L3");
}

#[tokio::test]
async fn given_unparseable_date_when_repayments_due_on_then_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let result = api.loans().repayments_due_on("31/12/2024").await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_custom_field_when_set_on_loan_then_patch_without_index() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/loans/L1/custominformation/purpose"))
        .and(body_json(json!({"value": "stock"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.loans()
        .set_custom_field("L1", "purpose", "stock")
        .await
        .unwrap();
}
