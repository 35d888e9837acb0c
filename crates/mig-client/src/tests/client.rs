use crate::{Client, ClientError, ClientSettings};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/api/", "token", ClientSettings::default())
        .unwrap();
    assert_eq!(client.base_url, "http://localhost:5000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client =
        Client::new("http://localhost:5000/api", "token", ClientSettings::default()).unwrap();
    assert_eq!(client.base_url, "http://localhost:5000/api");
}

#[test]
fn test_unauthorized_and_forbidden_are_auth_failures() {
    assert!(ClientError::api_error(401, "401: Unauthorized".into()).is_auth_failure());
    assert!(ClientError::api_error(403, "403: Forbidden".into()).is_auth_failure());
    assert!(!ClientError::api_error(500, "500: Internal Server Error".into()).is_auth_failure());
}

#[test]
fn test_server_errors_and_rate_limits_are_retryable() {
    assert!(ClientError::api_error(503, "503: Service Unavailable".into()).is_retryable());
    assert!(ClientError::api_error(429, "429: Too Many Requests".into()).is_retryable());
    assert!(!ClientError::api_error(400, "BAD_REQUEST: nope".into()).is_retryable());
    assert!(!ClientError::api_error(404, "404: Not Found".into()).is_retryable());
}

#[test]
fn test_json_errors_are_not_retryable() {
    let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(!ClientError::from(err).is_retryable());
}
