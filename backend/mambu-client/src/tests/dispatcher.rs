// Unit tests for response classification
// End-to-end dispatch against a mock server lives in integration_tests/dispatcher.rs

use crate::dispatcher::{
    FALLBACK_RETURN_CODE, FALLBACK_RETURN_STATUS, HttpMethod, classify_response,
};
use crate::error::MambuClientError;

use reqwest::Method;
use serde_json::json;

#[test]
fn given_200_with_array_body_when_classified_then_returned_verbatim() {
    let body = r#"[{"id":"1"},{"id":"2"}]"#;

    let value = classify_response(200, body).unwrap();

    assert_eq!(value, json!([{"id": "1"}, {"id": "2"}]));
}

#[test]
fn given_201_when_classified_then_success() {
    let value = classify_response(201, r#"{"encodedKey":"8a"}"#).unwrap();

    assert_eq!(value["encodedKey"], "8a");
}

/// **VALUE**: The platform's own diagnostic survives intact.
///
/// **WHY THIS MATTERS**: Callers branch on `returnCode` (602 means the loan
/// id is wrong, not that the platform is down).
///
/// **BUG THIS CATCHES**: Would catch the body being dropped in favour of a
/// generic HTTP error, or the fields being swapped.
#[test]
fn given_404_with_remote_error_body_when_classified_then_remote_error_fields_populated() {
    let body = r#"{"returnCode": 602, "returnStatus": "INVALID_LOAN_ID"}"#;

    let error = classify_response(404, body).unwrap_err();

    match error {
        MambuClientError::Remote {
            http_status,
            return_code,
            return_status,
            error_source,
            message,
            ..
        } => {
            assert_eq!(http_status.as_u16(), 404);
            assert_eq!(return_code, 602);
            assert_eq!(return_status, "INVALID_LOAN_ID");
            assert_eq!(error_source, None);
            assert_eq!(
                message,
                "Error performing the request, code: 404, return code: 602, return status: INVALID_LOAN_ID"
            );
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[test]
fn given_error_body_with_source_when_classified_then_source_in_message() {
    let body = r#"{"returnCode": 4, "returnStatus": "INVALID_PARAMETERS", "errorSource": "amount"}"#;

    let error = classify_response(400, body).unwrap_err();

    assert_eq!(error.return_code(), Some(4));
    match error {
        MambuClientError::Remote {
            error_source,
            message,
            ..
        } => {
            assert_eq!(error_source.as_deref(), Some("amount"));
            assert!(message.ends_with(", source: amount"), "{message}");
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

/// **VALUE**: A gateway error page still produces a structured remote error.
///
/// **WHY THIS MATTERS**: Load balancers answer 500/502 with HTML. The raw
/// text is the only clue about what went wrong.
///
/// **BUG THIS CATCHES**: Would catch a JSON parse failure escaping as a
/// `Json` error for what is really a failed call.
#[test]
fn given_500_with_non_json_body_when_classified_then_fallback_with_raw_source() {
    let body = "<html>Internal Server Error</html>";

    let error = classify_response(500, body).unwrap_err();

    match error {
        MambuClientError::Remote {
            http_status,
            return_code,
            return_status,
            error_source,
            ..
        } => {
            assert_eq!(http_status.as_u16(), 500);
            assert_eq!(return_code, FALLBACK_RETURN_CODE);
            assert_eq!(return_status, FALLBACK_RETURN_STATUS);
            assert_eq!(error_source.as_deref(), Some(body));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[test]
fn given_json_error_without_return_code_when_classified_then_fallback() {
    let body = r#"{"message": "nope"}"#;

    let error = classify_response(403, body).unwrap_err();

    assert_eq!(error.return_code(), Some(FALLBACK_RETURN_CODE));
    assert_eq!(error.http_status().map(|s| s.as_u16()), Some(403));
}

#[test]
fn given_non_string_error_source_when_classified_then_kept_as_json_text() {
    let body = r#"{"returnCode": 4, "returnStatus": "X", "errorSource": {"field": "amount"}}"#;

    let error = classify_response(400, body).unwrap_err();

    match error {
        MambuClientError::Remote { error_source, .. } => {
            assert_eq!(error_source.as_deref(), Some(r#"{"field":"amount"}"#));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

/// **VALUE**: Only 200 and 201 count as success.
///
/// **BUG THIS CATCHES**: Would catch a switch to `is_success()`, which would
/// hand a 204's empty body to the JSON decoder as if the call had answered.
#[test]
fn given_other_2xx_status_when_classified_then_remote_error() {
    let error = classify_response(204, "").unwrap_err();

    assert!(matches!(error, MambuClientError::Remote { .. }));
    assert_eq!(error.return_code(), Some(FALLBACK_RETURN_CODE));
}

#[test]
fn given_200_with_malformed_json_when_classified_then_json_error() {
    let error = classify_response(200, "{not json").unwrap_err();

    assert!(matches!(error, MambuClientError::Json { .. }));
}

#[test]
fn given_each_http_method_when_converted_then_maps_to_same_verb() {
    assert_eq!(Method::from(HttpMethod::Get), Method::GET);
    assert_eq!(Method::from(HttpMethod::Post), Method::POST);
    assert_eq!(Method::from(HttpMethod::Patch), Method::PATCH);
    assert_eq!(Method::from(HttpMethod::Delete), Method::DELETE);
    assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
}
