use crate::RoleHints;

use std::collections::BTreeMap;

#[test]
fn test_default_hints_preselect_matching_short_name() {
    let hints = RoleHints::default();
    let destination = ["authuser", "contentcreator", "superuser"];

    assert_eq!(hints.suggest("Super Admin", destination), 2);
    assert_eq!(hints.suggest("Course Creator", destination), 1);
    assert_eq!(hints.suggest("Authenticated User", destination), 0);
}

#[test]
fn test_unknown_role_defaults_to_first_choice() {
    let hints = RoleHints::default();
    assert_eq!(hints.suggest("Reviewer", ["authuser", "superuser"]), 0);
}

#[test]
fn test_hint_without_matching_destination_role_defaults_to_first_choice() {
    let hints = RoleHints::default();
    assert_eq!(hints.suggest("Super Admin", ["authuser", "editor"]), 0);
}

#[test]
fn test_extra_hints_override_defaults() {
    let extra = BTreeMap::from([
        ("Super Admin".to_string(), "admin".to_string()),
        ("Reviewer".to_string(), "reviewer".to_string()),
    ]);
    let hints = RoleHints::with_extra(&extra);

    assert_eq!(hints.hint("Super Admin"), Some("admin"));
    assert_eq!(hints.hint("Reviewer"), Some("reviewer"));
    assert_eq!(hints.hint("Course Creator"), Some("contentcreator"));
}
