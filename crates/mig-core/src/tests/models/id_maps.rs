use crate::{CoreError, IdMaps, ImportManifest, RecordId};

use std::collections::BTreeMap;

#[test]
fn given_empty_maps_when_role_id_then_unmapped_role_error() {
    let maps = IdMaps::default();

    let result = maps.role_id(&RecordId::from("r1"));

    assert!(matches!(result, Err(CoreError::UnmappedRole { .. })));
    assert!(!maps.roles_reconciled());
}

#[test]
fn given_reconciled_roles_when_role_id_then_destination_id() {
    let mut maps = IdMaps::default();
    maps.set_role_ids(BTreeMap::from([(RecordId::from("r1"), "dest-r1".to_string())]));

    assert_eq!(maps.role_id(&RecordId::from("r1")).unwrap(), "dest-r1");
    assert!(maps.roles_reconciled());
}

#[test]
fn given_unprocessed_user_when_user_id_then_unmapped_user_error() {
    let mut maps = IdMaps::default();
    maps.record_user(RecordId::from("u1"), "dest-u1");

    assert_eq!(maps.user_id(&RecordId::from("u1")).unwrap(), "dest-u1");
    let err = maps.user_id(&RecordId::from("u2")).unwrap_err();
    assert!(matches!(err, CoreError::UnmappedUser { .. }));
    assert!(err.to_string().contains("u2"));
}

#[test]
fn given_import_manifest_when_restart_then_credentials_and_users_survive() {
    let mut manifest = ImportManifest {
        api_url: Some("https://api.example.com".into()),
        auth_token: Some("secret".into()),
        ..Default::default()
    };
    manifest
        .maps
        .set_role_ids(BTreeMap::from([(RecordId::from("r1"), "x".to_string())]));
    manifest.maps.record_user(RecordId::from("u1"), "dest-u1");
    manifest.status.record_success(RecordId::from("c1"));

    manifest.restart();

    assert!(manifest.status.success.is_empty());
    assert!(!manifest.maps.roles_reconciled());
    assert!(manifest.maps.has_user(&RecordId::from("u1")));
    assert_eq!(manifest.auth_token.as_deref(), Some("secret"));
}

#[test]
fn test_import_manifest_roundtrip_keeps_maps() {
    let mut manifest = ImportManifest::default();
    manifest.maps.record_user(RecordId::from("u1"), "dest-u1");

    let json = serde_json::to_string(&manifest).unwrap();
    assert!(json.contains("userIds"));
    let restored: ImportManifest = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, manifest);
}
