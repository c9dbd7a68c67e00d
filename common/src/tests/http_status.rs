use crate::HttpStatusCode;

#[test]
fn given_ok_and_created_when_checked_then_accepted() {
    assert!(HttpStatusCode(200).is_accepted());
    assert!(HttpStatusCode(201).is_accepted());
}

/// **VALUE**: The lending platform treats only 200/201 as success.
///
/// **BUG THIS CATCHES**: Would catch a switch to a generic `2xx` range check,
/// which would hand a 204 (empty body) to the JSON decoder as a success.
#[test]
fn given_other_success_codes_when_checked_then_not_accepted() {
    assert!(!HttpStatusCode(202).is_accepted());
    assert!(!HttpStatusCode(204).is_accepted());
    assert!(!HttpStatusCode(404).is_accepted());
}

#[test]
fn given_status_codes_when_classified_then_client_and_server_ranges_split() {
    assert!(HttpStatusCode(404).is_client_error());
    assert!(!HttpStatusCode(404).is_server_error());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert_eq!(HttpStatusCode::from(503).to_string(), "503");
}
