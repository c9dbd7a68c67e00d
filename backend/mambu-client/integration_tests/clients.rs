use crate::helpers::{test_api, test_auth};

use mambu_client::MambuClientError;
use models::{ModelError, RecordKind};

use serde_json::json;
use wiremock::matchers::{body_json, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_client_id_when_full_details_requested_then_full_details_query_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clients/C1"))
        .and(query_param("fullDetails", "true"))
        .and(test_auth())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "C1"})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let client = api.clients().get_full_details("C1").await.unwrap();

    assert_eq!(client["id"], "C1");
}

/// **VALUE**: Create wraps records in the platform's envelope and leaves
/// out sections that were not supplied.
#[tokio::test]
async fn given_client_and_custom_fields_when_created_then_envelope_without_absent_sections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clients"))
        .and(body_json(json!({
            "client": {"firstName": "Ada", "lastName": "Lovelace"},
            "customInformation": [{"customFieldID": "nickname", "value": "Countess"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"client": {"id": "C9"}})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let client = api
        .record_from(RecordKind::Client, [("firstName", "Ada"), ("lastName", "Lovelace")])
        .unwrap();
    let nickname = api
        .record_from(
            RecordKind::CustomField,
            [("customFieldID", "nickname"), ("value", "Countess")],
        )
        .unwrap();

    let created = api
        .clients()
        .create(client, None, Some(vec![nickname]), None)
        .await
        .unwrap();

    assert_eq!(created["client"]["id"], "C9");
}

#[tokio::test]
async fn given_wrong_record_kind_when_created_then_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let loan = api.record(RecordKind::Loan);

    let result = api.clients().create(loan, None, None, None).await;

    assert!(matches!(
        result,
        Err(MambuClientError::Model(ModelError::KindMismatch { .. }))
    ));
}

#[tokio::test]
async fn given_new_group_index_when_custom_field_set_then_patch_to_indexed_path() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/clients/C1/custominformation/phones/-1"))
        .and(body_json(json!({"value": "+44 20 7946 0000"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.clients()
        .set_custom_field("C1", "phones", "+44 20 7946 0000", Some(-1))
        .await
        .unwrap();
}

/// **VALUE**: Bulk update issues exactly one call per field.
///
/// **BUG THIS CATCHES**: Would catch fields being dropped, duplicated, or
/// collapsed into a single request.
#[tokio::test]
async fn given_three_fields_when_set_in_bulk_then_three_patches_and_three_responses() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path_regex(r"^/api/clients/C1/custominformation/[a-z]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(3)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let fields: Vec<_> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(|id| {
            api.record_from(RecordKind::CustomField, [("customFieldID", id), ("value", "v")])
                .unwrap()
        })
        .collect();

    let responses = api.clients().set_custom_fields("C1", &fields).await.unwrap();

    assert_eq!(responses.len(), 3);
}

/// **VALUE**: One failing field does not stop the others, and the failure
/// is still reported.
///
/// **WHY THIS MATTERS**: The caller needs to know the batch was partial,
/// but cancelling in-flight updates would leave an unknown subset applied.
#[tokio::test]
async fn given_one_failing_field_when_set_in_bulk_then_all_sent_and_error_returned() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/clients/C1/custominformation/broken"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"returnCode": 4, "returnStatus": "INVALID_CUSTOM_FIELD_ID"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path_regex(r"^/api/clients/C1/custominformation/ok[0-9]$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(2)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let fields: Vec<_> = ["ok1", "broken", "ok2"]
        .into_iter()
        .map(|id| {
            api.record_from(RecordKind::CustomField, [("customFieldID", id), ("value", "v")])
                .unwrap()
        })
        .collect();

    let error = api
        .clients()
        .set_custom_fields("C1", &fields)
        .await
        .unwrap_err();

    assert_eq!(error.return_code(), Some(4));
}

#[tokio::test]
async fn given_field_without_value_when_set_in_bulk_then_missing_field_and_nothing_sent() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let complete = api
        .record_from(RecordKind::CustomField, [("customFieldID", "a"), ("value", "v")])
        .unwrap();
    let incomplete = api
        .record_from(RecordKind::CustomField, [("customFieldID", "b")])
        .unwrap();

    let result = api
        .clients()
        .set_custom_fields("C1", &[complete, incomplete])
        .await;

    assert!(matches!(
        result,
        Err(MambuClientError::Model(ModelError::MissingField { .. }))
    ));
}

#[tokio::test]
async fn given_indexed_field_when_deleted_then_delete_sent_to_indexed_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/clients/C1/custominformation/phones/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.clients()
        .delete_custom_field("C1", "phones", Some(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_address_when_addresses_updated_then_single_element_list_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/clients/C1"))
        .and(body_json(json!({"addresses": [{"city": "London", "postcode": "N1"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"client": {"id": "C1"}})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let address = api
        .record_from(RecordKind::Address, [("city", "London"), ("postcode", "N1")])
        .unwrap();

    api.clients().update_addresses("C1", address).await.unwrap();
}

#[tokio::test]
async fn given_grouped_values_when_max_field_index_then_largest_index() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clients/C1"))
        .and(query_param("fullDetails", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "C1",
            "customInformation": [
                {"customFieldID": "phones", "customFieldSetGroupIndex": 0},
                {"customFieldID": "phones", "customFieldSetGroupIndex": 4}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let index = api.clients().max_field_index("C1", "phones").await.unwrap();

    assert_eq!(index, Some(4));
}
