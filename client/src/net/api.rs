//! Auth service calls against the marketplace backend.
//!
//! ERROR HANDLING
//! ==============
//! Both calls are pass-throughs: no validation, no retry. Whatever the
//! request layer reports is returned unchanged so the screen decides how to
//! present it.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{HttpClient, Method, PreparedRequest};
use super::types::{AuthResponse, LoginRequest, RegisterRequest};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";

/// Unauthenticated `POST /auth/login` carrying the credentials.
fn login_request(client: &HttpClient, email: &str, password: &str) -> Result<PreparedRequest, ApiError> {
    let body = LoginRequest { email, password };
    client.prepare(Method::Post, LOGIN_ENDPOINT, Some(&body), None)
}

/// Unauthenticated `POST /auth/register` carrying the new account fields.
fn register_request(
    client: &HttpClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<PreparedRequest, ApiError> {
    let body = RegisterRequest { name, email, password };
    client.prepare(Method::Post, REGISTER_ENDPOINT, Some(&body), None)
}

/// Exchange credentials for an access token via `POST /auth/login`.
///
/// # Errors
///
/// Returns the request layer's [`ApiError`] for rejected credentials,
/// transport failures or unexpected payloads.
pub async fn login(client: &HttpClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let prepared = login_request(client, email, password)?;
    client.execute(prepared).await
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the request layer's [`ApiError`] on any failure.
pub async fn register(
    client: &HttpClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<serde_json::Value, ApiError> {
    let prepared = register_request(client, name, email, password)?;
    client.execute(prepared).await
}
