use crate::RecordId;

#[test]
fn test_record_id_from_plain_string() {
    let id: RecordId = serde_json::from_str(r#""5f1d7c0e2a""#).unwrap();
    assert_eq!(id.as_str(), "5f1d7c0e2a");
}

#[test]
fn test_record_id_from_extended_json_oid() {
    let id: RecordId = serde_json::from_str(r#"{"$oid":"5f1d7c0e2a"}"#).unwrap();
    assert_eq!(id, RecordId::from("5f1d7c0e2a"));
}

#[test]
fn test_record_id_serializes_as_plain_string() {
    let json = serde_json::to_string(&RecordId::from("abc")).unwrap();
    assert_eq!(json, r#""abc""#);
}

#[test]
fn test_record_id_rejects_numbers() {
    assert!(serde_json::from_str::<RecordId>("42").is_err());
}
