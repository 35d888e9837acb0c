use crate::{Course, CoreError, RecordId};

use serde_json::{Value, json};

fn document(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

#[test]
fn given_full_document_when_from_document_then_keeps_allow_listed_fields() {
    let doc = document(json!({
        "_id": {"$oid": "c1"},
        "title": "Fire Safety",
        "heroImage": {"$oid": "a1"},
        "_isShared": true,
        "_shareWithUsers": [{"$oid": "u2"}, "u3"],
        "createdBy": {"$oid": "u1"},
        "_tenantId": {"$oid": "t1"},
        "themeSettings": {"colour": "red"}
    }));

    let course = Course::from_document(&doc).unwrap();

    assert_eq!(course.id, RecordId::from("c1"));
    assert_eq!(course.title, "Fire Safety");
    assert_eq!(course.hero_image.as_deref(), Some("a1"));
    assert_eq!(course.is_shared, Some(true));
    assert_eq!(
        course.shared_with_users,
        Some(vec![RecordId::from("u2"), RecordId::from("u3")])
    );
    assert_eq!(course.created_by, Some(RecordId::from("u1")));
    assert!(course.relative_archive_path.is_none());

    let serialized = serde_json::to_value(&course).unwrap();
    assert!(serialized.get("themeSettings").is_none());
    assert!(serialized.get("_tenantId").is_none());
}

#[test]
fn given_null_optional_fields_when_from_document_then_none() {
    let doc = document(json!({
        "_id": "c1",
        "title": "Plain",
        "heroImage": null,
        "_shareWithUsers": null
    }));

    let course = Course::from_document(&doc).unwrap();

    assert!(course.hero_image.is_none());
    assert!(course.shared_with_users.is_none());
    assert!(course.created_by.is_none());
}

#[test]
fn given_missing_id_when_from_document_then_missing_field_error() {
    let doc = document(json!({ "title": "No id" }));

    let result = Course::from_document(&doc);

    assert!(matches!(
        result,
        Err(CoreError::MissingField { field: "_id", .. })
    ));
}

#[test]
fn given_wrong_shared_flag_type_when_from_document_then_invalid_field_error() {
    let doc = document(json!({ "_id": "c1", "title": "x", "_isShared": "yes" }));

    let result = Course::from_document(&doc);

    assert!(matches!(
        result,
        Err(CoreError::InvalidField {
            field: "_isShared",
            ..
        })
    ));
}
