use crate::import::{course_patch, generate_password, new_user};

use std::collections::BTreeMap;

use mig_core::{Course, CoreError, IdMaps, RecordId, RoleRef, User};

fn maps() -> IdMaps {
    let mut maps = IdMaps::default();
    maps.set_role_ids(BTreeMap::from([(
        RecordId::from("r1"),
        "dest-role-1".to_string(),
    )]));
    maps.record_user(RecordId::from("u1"), "dest-user-1");
    maps.record_user(RecordId::from("u2"), "dest-user-2");
    maps
}

fn user(roles: &[&str]) -> User {
    User {
        id: RecordId::from("u3"),
        email: "new@example.com".to_string(),
        first_name: "New".to_string(),
        last_name: "Person".to_string(),
        roles: roles
            .iter()
            .map(|id| RoleRef {
                id: RecordId::from(*id),
                name: "Role".to_string(),
            })
            .collect(),
        tenant_id: None,
    }
}

fn course() -> Course {
    Course {
        id: RecordId::from("c1"),
        title: "Intro".to_string(),
        hero_image: Some("assets/hero.png".to_string()),
        is_shared: Some(true),
        shared_with_users: Some(vec![RecordId::from("u1"), RecordId::from("u2")]),
        created_by: Some(RecordId::from("u1")),
        relative_archive_path: Some("c1.zip".to_string()),
    }
}

#[test]
fn test_generate_password_is_128_bit_hex() {
    let password = generate_password();

    assert_eq!(password.len(), 32);
    assert!(password.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(password, generate_password());
}

#[test]
fn given_mapped_roles_when_new_user_then_destination_role_ids() {
    let body = new_user(&user(&["r1"]), &maps()).unwrap();

    assert_eq!(body.email, "new@example.com");
    assert_eq!(body.roles, vec!["dest-role-1".to_string()]);
}

#[test]
fn given_unmapped_role_when_new_user_then_error() {
    let err = new_user(&user(&["r1", "r9"]), &maps()).unwrap_err();

    assert!(matches!(err, CoreError::UnmappedRole { .. }));
}

#[test]
fn given_mapped_users_when_course_patch_then_destination_ids() {
    let patch = course_patch(&course(), &maps()).unwrap();

    assert_eq!(patch.is_shared, Some(true));
    assert_eq!(
        patch.share_with_users,
        Some(vec!["dest-user-1".to_string(), "dest-user-2".to_string()])
    );
    assert_eq!(patch.created_by.as_deref(), Some("dest-user-1"));
    assert_eq!(patch.hero_image.as_deref(), Some("assets/hero.png"));
}

#[test]
fn given_unmapped_creator_when_course_patch_then_error() {
    let course = Course {
        created_by: Some(RecordId::from("u9")),
        ..course()
    };

    let err = course_patch(&course, &maps()).unwrap_err();

    assert!(matches!(err, CoreError::UnmappedUser { .. }));
}
