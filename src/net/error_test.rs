use super::*;

#[test]
fn unauthorized_status_is_an_auth_failure() {
    let err = ApiError::Status { status: 401, path: "/api/users".to_owned() };
    assert!(err.is_auth());
    let err = ApiError::Status { status: 403, path: "/api/users".to_owned() };
    assert!(err.is_auth());
}

#[test]
fn missing_credential_is_an_auth_failure() {
    assert!(ApiError::MissingCredential.is_auth());
}

#[test]
fn server_and_transport_failures_are_not_auth_failures() {
    assert!(!ApiError::Status { status: 500, path: "/api/users".to_owned() }.is_auth());
    assert!(!ApiError::Network("connection refused".to_owned()).is_auth());
    assert!(!ApiError::Decode("missing field".to_owned()).is_auth());
}

#[test]
fn status_error_message_names_the_path() {
    let err = ApiError::Status { status: 500, path: "/api/projects".to_owned() };
    assert_eq!(err.to_string(), "server returned 500 for /api/projects");
}
