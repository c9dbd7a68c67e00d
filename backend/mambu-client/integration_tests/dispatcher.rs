use crate::helpers::{test_auth, test_config};

use mambu_client::dispatcher::FALLBACK_RETURN_CODE;
use mambu_client::{Dispatcher, HttpMethod, MambuClientError};
use models::{Body, RecordKind, SchemaRegistry};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: One call sends one authenticated JSON request.
///
/// **WHY THIS MATTERS**: Every resource operation funnels through here.
/// A missing auth header or content type fails every write on the platform.
///
/// **BUG THIS CATCHES**: Would catch nested records or dates being
/// serialized as anything other than their field maps and ISO strings.
#[tokio::test]
async fn given_nested_record_body_when_posted_then_authenticated_json_sent_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/loans/L1/transactions"))
        .and(test_auth())
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "transactions": [{"type": "FEE", "amount": 5, "date": "2020-01-02"}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"encodedKey": "tx1"})))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::new(&test_config(&server)).unwrap();
    let fee = SchemaRegistry::builtin()
        .record_from(
            RecordKind::LoanTransaction,
            [
                ("type", Body::from("FEE")),
                ("amount", Body::from(5)),
                ("date", Body::from(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())),
            ],
        )
        .unwrap();
    let body = Body::map([("transactions", Body::list([fee]))]);

    let response = dispatcher
        .call(HttpMethod::Post, "loans/L1/transactions", None, Some(&body))
        .await
        .unwrap();

    assert_eq!(response, json!({"encodedKey": "tx1"}));
}

#[tokio::test]
async fn given_query_pairs_when_get_called_then_sent_as_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clients"))
        .and(query_param("branchId", "B1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::new(&test_config(&server)).unwrap();
    let query = vec![
        ("branchId".to_string(), "B1".to_string()),
        ("limit".to_string(), "10".to_string()),
    ];

    let response = dispatcher.get("clients", Some(query.as_slice())).await.unwrap();

    assert_eq!(response, json!([]));
}

#[tokio::test]
async fn given_404_remote_error_when_called_then_remote_error_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loans/nope"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"returnCode": 602, "returnStatus": "INVALID_LOAN_ID"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::new(&test_config(&server)).unwrap();

    let error = dispatcher.get("loans/nope", None).await.unwrap_err();

    match error {
        MambuClientError::Remote {
            http_status,
            return_code,
            return_status,
            ..
        } => {
            assert_eq!(http_status.as_u16(), 404);
            assert_eq!(return_code, 602);
            assert_eq!(return_status, "INVALID_LOAN_ID");
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

/// **VALUE**: Failures are reported once, never retried.
#[tokio::test]
async fn given_500_html_when_called_then_fallback_error_and_single_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/documents/D1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::new(&test_config(&server)).unwrap();

    let error = dispatcher.delete("documents/D1").await.unwrap_err();

    assert_eq!(error.return_code(), Some(FALLBACK_RETURN_CODE));
    match error {
        MambuClientError::Remote { error_source, .. } => {
            assert_eq!(error_source.as_deref(), Some("upstream exploded"));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn given_wrong_password_when_called_then_server_rejects_and_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(test_auth())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"returnCode": 2, "returnStatus": "INVALID_CREDENTIALS"})),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&server);
    config.password = common::RedactedSecret::new("wrong");
    let dispatcher = Dispatcher::new(&config).unwrap();

    let error = dispatcher.get("clients", None).await.unwrap_err();

    assert_eq!(error.http_status().map(|s| s.as_u16()), Some(401));
    assert_eq!(error.return_code(), Some(2));
}

#[test]
fn given_invalid_config_when_facade_built_then_config_error() {
    let config = mambu_client::MambuConfig::new("acme.mambu.com", "", "secret");

    let result = mambu_client::MambuApi::with_builtin_schema(&config);

    assert!(matches!(
        result,
        Err(mambu_client::CoreError::Config(
            mambu_client::ConfigError::ValidationError { .. }
        ))
    ));
}
