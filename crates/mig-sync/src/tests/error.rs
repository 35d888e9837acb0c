use crate::MigrateError;

use mig_client::ClientError;
use mig_core::{CoreError, FailureKind, RecordId};

#[test]
fn given_unauthorized_api_error_when_converted_then_authentication() {
    let err = MigrateError::from(ClientError::api_error(401, "401: Unauthorized".to_string()));

    assert_eq!(err.kind(), FailureKind::Authentication);
}

#[test]
fn given_server_api_error_when_converted_then_remote_operation() {
    let err = MigrateError::from(ClientError::api_error(500, "500: Internal".to_string()));

    assert_eq!(err.kind(), FailureKind::RemoteOperation);
}

#[test]
fn given_unmapped_user_when_converted_then_data_integrity() {
    let err = MigrateError::from(CoreError::unmapped_user(RecordId::from("u1")));

    assert_eq!(err.kind(), FailureKind::DataIntegrity);
    assert!(err.to_string().contains("u1"));
}

#[test]
fn test_cancelled_is_cancelled() {
    assert!(MigrateError::cancelled().is_cancelled());
    assert!(!MigrateError::storage("disk full").is_cancelled());
}
