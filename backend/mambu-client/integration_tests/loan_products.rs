use crate::helpers::test_api;

use mambu_client::MambuClientError;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_product_when_encoded_key_requested_then_key_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loanproducts/SME"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "SME", "encodedKey": "8a9f"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let key = api.loan_products().get_encoded_key("SME").await.unwrap();

    assert_eq!(key, "8a9f");
}

#[tokio::test]
async fn given_product_without_key_when_encoded_key_requested_then_missing_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loanproducts/SME"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "SME"})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let result = api.loan_products().get_encoded_key("SME").await;

    match result {
        Err(MambuClientError::MissingResponseField { field, .. }) => {
            assert_eq!(field, "encodedKey")
        }
        other => panic!("expected MissingResponseField, got {other:?}"),
    }
}

#[tokio::test]
async fn given_no_id_when_products_requested_then_collection_listed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loanproducts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "SME"}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let products = api.loan_products().get(None).await.unwrap();

    assert_eq!(products[0]["id"], "SME");
}
