use super::*;

fn status(status: u16) -> ApiError {
    ApiError::Status { status, detail: None }
}

// =============================================================
// kind
// =============================================================

#[test]
fn rejected_credentials_statuses_map_to_invalid_credentials() {
    for code in [400, 401, 403, 422] {
        assert_eq!(status(code).kind(), ApiErrorKind::InvalidCredentials, "status {code}");
    }
}

#[test]
fn other_statuses_map_to_server() {
    for code in [404, 429, 500, 502, 503] {
        assert_eq!(status(code).kind(), ApiErrorKind::Server, "status {code}");
    }
}

#[test]
fn transport_failure_maps_to_network() {
    assert_eq!(ApiError::Network("connection refused".to_owned()).kind(), ApiErrorKind::Network);
}

#[test]
fn parse_failure_maps_to_server() {
    assert_eq!(ApiError::Parse("missing field".to_owned()).kind(), ApiErrorKind::Server);
}

// =============================================================
// detail
// =============================================================

#[test]
fn detail_from_body_reads_fastapi_style_detail() {
    assert_eq!(
        detail_from_body(r#"{"detail":"Email already registered"}"#),
        Some("Email already registered".to_owned())
    );
}

#[test]
fn detail_from_body_ignores_non_string_detail() {
    assert_eq!(detail_from_body(r#"{"detail":[{"loc":["body","email"]}]}"#), None);
}

#[test]
fn detail_from_body_ignores_non_json() {
    assert_eq!(detail_from_body("<html>Bad Gateway</html>"), None);
}

#[test]
fn detail_is_exposed_only_for_status_errors() {
    let err = ApiError::Status { status: 401, detail: Some("Invalid email or password".to_owned()) };
    assert_eq!(err.detail(), Some("Invalid email or password"));
    assert_eq!(ApiError::Network("x".to_owned()).detail(), None);
}

#[test]
fn display_includes_status_code() {
    assert_eq!(status(503).to_string(), "server responded with status 503");
}
