use crate::{
    Course, ExportManifest, FailureKind, RecordId, Role, RoleRef, SCHEMA_VERSION, UnitError, User,
};

fn course(id: &str) -> Course {
    Course {
        id: RecordId::from(id),
        title: format!("Course {id}"),
        hero_image: None,
        is_shared: None,
        shared_with_users: None,
        created_by: None,
        relative_archive_path: None,
    }
}

fn manifest() -> ExportManifest {
    let mut manifest = ExportManifest::new("2024-01-01T00:00:00Z", false);
    manifest.roles = vec![Role {
        id: RecordId::from("r1"),
        name: "Super Admin".into(),
    }];
    manifest.users = vec![User {
        id: RecordId::from("u1"),
        email: "admin@example.com".into(),
        first_name: "Ada".into(),
        last_name: "Admin".into(),
        roles: vec![RoleRef {
            id: RecordId::from("r1"),
            name: "Super Admin".into(),
        }],
        tenant_id: None,
    }];
    manifest.courses = vec![course("a"), course("b"), course("c")];
    manifest
}

#[test]
fn test_new_manifest_is_empty() {
    let manifest = ExportManifest::new("2024-01-01T00:00:00Z", true);
    assert_eq!(manifest.schema_version, SCHEMA_VERSION);
    assert!(manifest.force_rebuild);
    assert!(manifest.courses.is_empty());
    assert!(manifest.status.success.is_empty());
}

#[test]
fn test_progress_counts_both_terminal_sets() {
    let mut manifest = manifest();
    manifest.status.record_success(RecordId::from("a"));
    manifest.status.record_error(UnitError::new(
        RecordId::from("b"),
        FailureKind::RemoteOperation,
        "boom",
    ));

    let progress = manifest.progress();

    assert_eq!(progress.completed, 2);
    assert_eq!(progress.total, 3);
    assert!(!progress.is_complete());
    assert_eq!(progress.to_string(), "2/3");
}

#[test]
fn test_error_then_success_moves_id_out_of_error() {
    let mut manifest = manifest();
    let id = RecordId::from("a");
    manifest.status.record_error(UnitError::new(
        id.clone(),
        FailureKind::Storage,
        "disk full",
    ));
    manifest.status.record_success(id.clone());

    assert!(manifest.status.is_success(&id));
    assert!(!manifest.status.is_error(&id));
}

#[test]
fn test_find_user_with_role() {
    let manifest = manifest();
    let admin = manifest.find_user_with_role("Super Admin").unwrap();
    assert_eq!(admin.email, "admin@example.com");
    assert!(manifest.find_user_with_role("Course Creator").is_none());
}

#[test]
fn test_manifest_json_uses_camel_case() {
    let json = serde_json::to_value(manifest()).unwrap();
    assert!(json.get("schemaVersion").is_some());
    assert!(json.get("rejectedUsers").is_some());
    assert_eq!(json["users"][0]["firstName"], "Ada");
    assert_eq!(json["users"][0]["roles"][0]["name"], "Super Admin");
}

#[test]
fn test_role_ref_resolve_unknown_role() {
    let manifest = manifest();
    let result = RoleRef::resolve(
        &RecordId::from("u9"),
        &RecordId::from("missing"),
        &manifest.roles,
    );
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("missing"));
}
