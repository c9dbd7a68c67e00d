// Unit tests for the Typed Record
// Field whitelisting at assignment time, reads of unset fields, serialization shape

use crate::{Body, ModelError, RecordKind, SchemaRegistry};

use serde_json::{Value, json};

/// **VALUE**: Every record kind rejects names outside its vocabulary.
///
/// **WHY THIS MATTERS**: The platform silently ignores or misreads typo'd
/// fields. Rejecting them locally saves a round-trip and a confusing result.
///
/// **BUG THIS CATCHES**: Would catch a kind whose schema lookup falls through
/// to an empty or permissive set.
#[test]
fn given_any_kind_when_unknown_field_assigned_then_invalid_field() {
    let registry = SchemaRegistry::builtin();

    for kind in RecordKind::ALL {
        let mut record = registry.record(kind);

        let result = record.set("notARealField", "x");

        match result {
            Err(ModelError::InvalidField { kind: got, field, .. }) => {
                assert_eq!(got, kind);
                assert_eq!(field, "notARealField");
            }
            other => panic!("{kind}: expected InvalidField, got {other:?}"),
        }
        assert!(record.is_empty(), "{kind}: rejected field must not be stored");
    }
}

/// **VALUE**: Every field of every built-in vocabulary is assignable and
/// reads back unchanged.
#[test]
fn given_any_kind_when_allowed_field_assigned_then_value_retrievable() {
    let registry = SchemaRegistry::builtin();

    for kind in RecordKind::ALL {
        let schema = registry.schema(kind);
        let mut record = registry.record(kind);

        for field in schema.fields() {
            record.set(field, format!("{kind}-{field}")).unwrap();
        }

        for field in schema.fields() {
            assert_eq!(
                record.get(field).unwrap(),
                &Body::from(format!("{kind}-{field}"))
            );
        }
        assert_eq!(record.len(), schema.len());
    }
}

#[test]
fn given_unset_field_when_read_then_missing_field() {
    let record = SchemaRegistry::builtin().record(RecordKind::Client);

    let err = record.get("firstName").unwrap_err();

    assert!(matches!(err, ModelError::MissingField { .. }));
    assert!(err.to_string().contains("firstName"));
}

#[test]
fn given_mapping_with_one_bad_key_when_record_from_then_whole_construction_fails() {
    let registry = SchemaRegistry::builtin();

    let result = registry.record_from(
        RecordKind::Client,
        [("firstName", "Ada"), ("fristName", "typo")],
    );

    let err = result.unwrap_err();
    assert!(matches!(err, ModelError::InvalidField { ref field, .. } if field == "fristName"));
    assert!(err.to_string().contains("client"));
}

#[test]
fn given_builder_chain_when_fields_valid_then_record_holds_all() {
    let record = SchemaRegistry::builtin()
        .record(RecordKind::LoanTransaction)
        .with("type", "FEE")
        .and_then(|r| r.with("amount", 10.5))
        .unwrap();

    assert_eq!(record.kind(), RecordKind::LoanTransaction);
    assert_eq!(record.get("type").unwrap(), &Body::from("FEE"));
    assert!(record.contains("amount"));
    assert!(!record.contains("date"));
}

/// **VALUE**: Serialized records carry exactly the assigned fields.
///
/// **BUG THIS CATCHES**: Would catch the schema, kind, or unset fields
/// leaking into the JSON sent over the wire.
#[test]
fn given_record_when_serialized_then_json_object_has_exactly_assigned_fields() {
    let record = SchemaRegistry::builtin()
        .record_from(
            RecordKind::Address,
            [("line1", Body::from("1 High St")), ("postcode", Body::from("N1 1AA"))],
        )
        .unwrap();

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json, json!({"line1": "1 High St", "postcode": "N1 1AA"}));
    let Value::Object(map) = json else {
        panic!("record must serialize to an object");
    };
    assert_eq!(map.len(), record.len());
}

#[test]
fn given_reassigned_field_when_read_then_latest_value_wins() {
    let mut record = SchemaRegistry::builtin().record(RecordKind::CustomField);

    record.set("value", "first").unwrap();
    record.set("value", "second").unwrap();

    assert_eq!(record.get("value").unwrap(), &Body::from("second"));
    assert_eq!(record.remove("value"), Some(Body::from("second")));
    assert!(record.is_empty());
}

#[test]
fn given_query_record_when_flattened_then_values_are_plain_strings() {
    let record = SchemaRegistry::builtin()
        .record_from(
            RecordKind::ClientQuery,
            [
                ("fullDetails", Body::from(true)),
                ("firstName", Body::from("Ada")),
                ("limit", Body::from(5)),
            ],
        )
        .unwrap();

    let query = record.to_query();

    assert_eq!(
        query,
        vec![
            ("firstName".to_string(), "Ada".to_string()),
            ("fullDetails".to_string(), "true".to_string()),
            ("limit".to_string(), "5".to_string()),
        ]
    );
}

#[test]
fn given_loan_record_when_expecting_client_then_kind_mismatch() {
    let registry = SchemaRegistry::builtin();
    let loan = registry.record(RecordKind::Loan);

    let result = loan.expect_kind(RecordKind::Client);

    assert!(matches!(
        result,
        Err(ModelError::KindMismatch {
            expected: RecordKind::Client,
            actual: RecordKind::Loan,
            ..
        })
    ));
}
