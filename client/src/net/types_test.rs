use super::*;

#[test]
fn login_request_serializes_two_fields() {
    let body = LoginRequest { email: "demo@electrohub.com", password: "password123" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "demo@electrohub.com", "password": "password123" })
    );
}

#[test]
fn register_request_serializes_three_fields() {
    let body = RegisterRequest { name: "Ada", email: "ada@example.com", password: "pw" };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "pw" })
    );
}

#[test]
fn auth_response_keeps_user_as_raw_json() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"access_token":"T","user":{"user_id":"user_demo","email":"demo@electrohub.com","city":null}}"#,
    )
    .unwrap();
    assert_eq!(resp.access_token, "T");
    assert_eq!(resp.user.unwrap()["user_id"], "user_demo");
}

#[test]
fn auth_response_user_is_optional() {
    let resp: AuthResponse = serde_json::from_str(r#"{"access_token":"T"}"#).unwrap();
    assert!(resp.user.is_none());
}

#[test]
fn auth_response_requires_access_token() {
    assert!(serde_json::from_str::<AuthResponse>(r#"{"user":{}}"#).is_err());
}
