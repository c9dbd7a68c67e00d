use crate::helpers::test_api;

use mambu_client::resources::CustomFieldSetType;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_field_id_when_fetched_then_customfields_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customfields/nickname"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "nickname"})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let field = api.custom_fields().get("nickname").await.unwrap();

    assert_eq!(field["id"], "nickname");
}

#[tokio::test]
async fn given_set_type_when_sets_requested_then_type_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customfieldsets"))
        .and(query_param("type", "LOAN_ACCOUNT_INFO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "Loan extras"}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let sets = api
        .custom_fields()
        .get_sets(Some(CustomFieldSetType::LoanAccountInfo))
        .await
        .unwrap();

    assert_eq!(sets[0]["name"], "Loan extras");
}

#[tokio::test]
async fn given_no_set_type_when_sets_requested_then_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customfieldsets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.custom_fields().get_sets(None).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}
