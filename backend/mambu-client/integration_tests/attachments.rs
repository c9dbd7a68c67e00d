use crate::helpers::test_api;

use mambu_client::MambuClientError;
use models::RecordKind;

use serde_json::json;
use wiremock::matchers::{any, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: An unknown holder collection is rejected locally.
///
/// **WHY THIS MATTERS**: `widgets/7/documents` would come back as an opaque
/// 404 from the platform. The local error names the allowed set.
#[tokio::test]
async fn given_unknown_entity_when_documents_requested_then_unknown_entity_and_no_call() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let result = api.attachments().get_by_entity("widgets", "7").await;

    match result {
        Err(MambuClientError::UnknownEntity { entity, .. }) => assert_eq!(entity, "widgets"),
        other => panic!("expected UnknownEntity, got {other:?}"),
    }
}

#[tokio::test]
async fn given_known_entity_when_documents_requested_then_get_issued() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loanProducts/P1/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"encodedKey": "d1"}])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    let documents = api
        .attachments()
        .get_by_entity("loanProducts", "P1")
        .await
        .unwrap();

    assert_eq!(documents[0]["encodedKey"], "d1");
}

#[tokio::test]
async fn given_client_shorthand_when_documents_requested_then_clients_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clients/C1/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.attachments().get_for_client("C1").await.unwrap();
}

#[tokio::test]
async fn given_document_and_bytes_when_uploaded_then_base64_content_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/documents"))
        .and(body_json(json!({
            "document": {
                "documentHolderKey": "8a1",
                "documentHolderType": "LOAN_ACCOUNT",
                "name": "contract",
                "type": "txt"
            },
            "documentContent": "c2lnbmVk"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"encodedKey": "d2"})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);
    let document = api
        .record_from(
            RecordKind::Document,
            [
                ("documentHolderKey", "8a1"),
                ("documentHolderType", "LOAN_ACCOUNT"),
                ("name", "contract"),
                ("type", "txt"),
            ],
        )
        .unwrap();

    let created = api.attachments().create(document, b"signed").await.unwrap();

    assert_eq!(created["encodedKey"], "d2");
}

#[tokio::test]
async fn given_document_id_when_deleted_then_delete_sent() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents/d2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"returnCode": 0})))
        .expect(1)
        .mount(&server)
        .await;
    let api = test_api(&server);

    api.attachments().delete("d2").await.unwrap();
}
