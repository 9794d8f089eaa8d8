use super::*;

#[test]
fn bad_credentials_get_a_friendly_message() {
    assert_eq!(login_error_message(&ApiError::Unauthenticated), "Invalid email or password.");
}

#[test]
fn validation_prefers_email_then_password_errors() {
    let err = ApiError::from_status(
        422,
        r#"{"message":"Invalid data","errors":{"password":["Password is too short."],"email":["Email is invalid."]}}"#,
    );
    assert_eq!(login_error_message(&err), "Email is invalid.");

    let general = ApiError::from_status(422, r#"{"message":"These credentials do not match our records."}"#);
    assert_eq!(login_error_message(&general), "These credentials do not match our records.");
}

#[test]
fn network_failures_use_generic_message() {
    let err = ApiError::Transport("offline".to_owned());
    assert_eq!(login_error_message(&err), "Could not reach the server. Check your connection.");
}
