use super::*;

#[test]
fn rejected_credentials_get_a_friendly_message() {
    let err = ApiError::Status { status: 401, path: "/api/auth/login".to_owned() };
    assert_eq!(login_failure_message(&err), "Invalid email or password.");
}

#[test]
fn transport_failures_keep_the_cause() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(login_failure_message(&err), "Login failed: request failed: connection refused");
}
