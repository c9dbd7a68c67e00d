use crate::{ModelError, RecordKind, SchemaRegistry};

#[test]
fn given_builtin_registry_when_queried_then_every_kind_has_fields() {
    let registry = SchemaRegistry::default();

    for kind in RecordKind::ALL {
        assert!(!registry.schema(kind).is_empty(), "{kind} has no fields");
        assert_eq!(registry.schema(kind).kind(), kind);
    }
}

/// **VALUE**: An injected vocabulary replaces the built-in one for that kind only.
#[test]
fn given_override_when_applied_then_only_that_kind_changes() {
    let registry = SchemaRegistry::builtin().with_fields(RecordKind::Document, ["name"]);

    let document = registry.schema(RecordKind::Document);
    assert!(document.allows("name"));
    assert!(!document.allows("documentHolderKey"));
    assert!(registry.schema(RecordKind::Client).allows("firstName"));
}

#[test]
fn given_kind_names_when_parsed_then_round_trip() {
    for kind in RecordKind::ALL {
        assert_eq!(kind.name().parse::<RecordKind>().unwrap(), kind);
    }

    let err = "widget".parse::<RecordKind>().unwrap_err();
    assert!(matches!(err, ModelError::UnknownKind { ref name, .. } if name == "widget"));
}
