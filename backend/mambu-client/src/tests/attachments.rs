// Unit tests for attachment holder validation and upload payloads

use crate::error::MambuClientError;
use crate::resources::attachments::{ATTACHMENT_HOLDERS, AttachmentHolder, upload_body};

use models::{Body, ModelError, RecordKind, SchemaRegistry};

use serde_json::json;

#[test]
fn given_every_known_holder_name_when_parsed_then_round_trips() {
    for name in ATTACHMENT_HOLDERS {
        let holder: AttachmentHolder = name.parse().unwrap();

        assert_eq!(holder.as_str(), *name);
    }
    assert_eq!(AttachmentHolder::ALL.len(), ATTACHMENT_HOLDERS.len());
}

/// **VALUE**: Unknown holder names fail locally with the allowed set.
///
/// **BUG THIS CATCHES**: Would catch case-insensitive matching (`Loans`)
/// or a silent fallback to some default collection.
#[test]
fn given_unknown_holder_name_when_parsed_then_unknown_entity() {
    for name in ["widgets", "Loans", ""] {
        let result = name.parse::<AttachmentHolder>();

        match result {
            Err(MambuClientError::UnknownEntity { entity, allowed, .. }) => {
                assert_eq!(entity, name);
                assert_eq!(allowed, ATTACHMENT_HOLDERS);
            }
            other => panic!("expected UnknownEntity for {name:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_document_record_when_upload_body_built_then_content_base64() {
    let schema = SchemaRegistry::builtin();
    let document = schema
        .record_from(
            RecordKind::Document,
            [
                ("documentHolderKey", "8a19"),
                ("documentHolderType", "CLIENT"),
                ("name", "passport"),
                ("type", "pdf"),
            ],
        )
        .unwrap();

    let body = upload_body(Body::from(document), b"hello").unwrap();

    assert_eq!(
        body.to_json().unwrap(),
        json!({
            "document": {
                "documentHolderKey": "8a19",
                "documentHolderType": "CLIENT",
                "name": "passport",
                "type": "pdf"
            },
            "documentContent": "aGVsbG8="
        })
    );
}

#[test]
fn given_non_document_record_when_upload_body_built_then_kind_mismatch() {
    let schema = SchemaRegistry::builtin();
    let client = schema.record(RecordKind::Client);

    let result = upload_body(Body::from(client), b"");

    assert!(matches!(
        result,
        Err(MambuClientError::Model(ModelError::KindMismatch { .. }))
    ));
}
