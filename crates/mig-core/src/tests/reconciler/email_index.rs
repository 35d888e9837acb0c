use crate::EmailIndex;

#[test]
fn test_find_is_case_insensitive() {
    let index = EmailIndex::new([("Ada@Example.com", "d1"), ("bob@example.com", "d2")]);

    assert_eq!(index.find("ada@example.com"), Some("d1"));
    assert_eq!(index.find("  BOB@EXAMPLE.COM "), Some("d2"));
    assert_eq!(index.find("carol@example.com"), None);
}

#[test]
fn test_insert_makes_user_findable() {
    let mut index = EmailIndex::default();
    assert_eq!(index.find("new@example.com"), None);

    index.insert("New@Example.com", "d3");

    assert_eq!(index.find("new@example.com"), Some("d3"));
}
