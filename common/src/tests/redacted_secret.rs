use crate::RedactedSecret;

/// **VALUE**: The API password must never show up in debug logs.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_secret_when_debug_formatted_then_value_hidden() {
    let secret = RedactedSecret::new("AComplex3Password");

    let debug = format!("{:?}", secret);
    let display = format!("{}", secret);

    assert!(!debug.contains("AComplex3Password"));
    assert!(!display.contains("AComplex3Password"));
    assert_eq!(secret.expose(), "AComplex3Password");
    assert_eq!(secret.len(), 17);
}

#[test]
fn given_secret_when_serialized_then_fails() {
    let secret = RedactedSecret::new("hunter2");

    let result = serde_json::to_string(&secret);

    assert!(result.is_err(), "Secrets must not serialize");
}

#[test]
fn given_json_string_when_deserialized_then_wraps_value() {
    let secret: RedactedSecret = serde_json::from_str("\"hunter2\"").unwrap();

    assert_eq!(secret.expose(), "hunter2");
    assert!(!secret.is_empty());
}
