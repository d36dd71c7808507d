use super::*;
use crate::state::request::INVALID_CREDENTIALS_MESSAGE;

fn token_response(token: &str) -> AuthResponse {
    AuthResponse { access_token: token.to_owned(), user: None }
}

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  demo@electrohub.com ", " pw "),
        Ok(("demo@electrohub.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_email() {
    assert_eq!(validate_login_input("   ", "password123"), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("demo@electrohub.com", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn demo_credentials_pass_validation() {
    assert!(validate_login_input(DEMO_EMAIL, DEMO_PASSWORD).is_ok());
}

// =============================================================
// login_outcome
// =============================================================

#[test]
fn successful_login_signs_session_in() {
    let (state, token) = login_outcome(Ok(token_response("T")));
    assert_eq!(state, RequestState::Succeeded);

    let mut session = Session::default();
    session.sign_in(token.unwrap());
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("T"));
}

#[test]
fn rejected_login_keeps_session_anonymous_with_fixed_message() {
    let (state, token) = login_outcome(Err(ApiError::Status { status: 401, detail: None }));
    assert_eq!(token, None);
    assert_eq!(state.error_message(), Some(INVALID_CREDENTIALS_MESSAGE));
    assert_eq!(state.error_message(), Some("Invalid email or password"));
}

#[test]
fn network_failure_reports_network_kind() {
    let (state, token) = login_outcome(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(token, None);
    assert_eq!(state, RequestState::Failed(ApiErrorKind::Network));
}

#[test]
fn server_failure_reports_server_kind() {
    let (state, _) = login_outcome(Err(ApiError::Status { status: 502, detail: None }));
    assert_eq!(state, RequestState::Failed(ApiErrorKind::Server));
}

#[test]
fn empty_access_token_is_treated_as_server_failure() {
    let (state, token) = login_outcome(Ok(token_response("")));
    assert_eq!(token, None);
    assert_eq!(state, RequestState::Failed(ApiErrorKind::Server));
}

// =============================================================
// login_failure_log
// =============================================================

#[test]
fn failure_log_includes_backend_detail() {
    let err = ApiError::Status { status: 401, detail: Some("Invalid email or password".to_owned()) };
    assert_eq!(
        login_failure_log(&err),
        "login failed: server responded with status 401 (Invalid email or password)"
    );
}

#[test]
fn failure_log_without_detail_uses_error_text() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(login_failure_log(&err), "login failed: request failed: offline");
}
