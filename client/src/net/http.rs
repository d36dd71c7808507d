//! Generic JSON-over-HTTP request sender.
//!
//! Client-side (hydrate): requests go out through `gloo-net` (browser fetch).
//! Server-side (SSR): `request` returns a network error since these calls are
//! only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The bearer token is a per-call argument rather than mutable client state,
//! so the session owner decides which requests are authenticated. Header and
//! response handling live in pure helpers (`prepare`, `decode_response`) that
//! run the same way in native tests and in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, detail_from_body};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP verbs the client issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// A fully resolved request: everything needed to hit the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Request sender bound to a base address.
///
/// An empty base address targets the origin that served the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Client using relative URLs, relying on same-origin delivery.
    pub fn same_origin() -> Self {
        Self::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base address and `path` with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }

    /// Resolve url, headers and serialized body for a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if `body` cannot be serialized.
    pub fn prepare<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<PreparedRequest, ApiError> {
        let mut headers = Vec::new();
        if let Some(value) = bearer_header(token) {
            headers.push((AUTHORIZATION, value));
        }
        let body = match body {
            Some(body) => {
                headers.push((CONTENT_TYPE, JSON_CONTENT_TYPE.to_owned()));
                Some(serde_json::to_string(body).map_err(|e| ApiError::Network(e.to_string()))?)
            }
            None => None,
        };
        Ok(PreparedRequest { method, url: self.url(path), headers, body })
    }

    /// Send a request and decode its JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when nothing came back, [`ApiError::Status`]
    /// for non-2xx responses and [`ApiError::Parse`] for unreadable payloads.
    pub async fn request<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<R, ApiError> {
        let prepared = self.prepare(method, path, body, token)?;
        self.execute(prepared).await
    }

    /// Send an already prepared request and decode its JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::request`].
    pub async fn execute<R: DeserializeOwned>(&self, prepared: PreparedRequest) -> Result<R, ApiError> {
        let (status, text) = send(prepared).await?;
        decode_response(status, &text)
    }
}

/// `Bearer <token>` for a present, non-empty token.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Turn a status code and raw body into the caller's payload type.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses and [`ApiError::Parse`]
/// when a 2xx body does not match `R`.
pub fn decode_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { status, detail: detail_from_body(body) });
    }
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send(prepared: PreparedRequest) -> Result<(u16, String), ApiError> {
    use gloo_net::http::Request;

    let mut builder = match prepared.method {
        Method::Get => Request::get(&prepared.url),
        Method::Post => Request::post(&prepared.url),
        Method::Put => Request::put(&prepared.url),
        Method::Patch => Request::patch(&prepared.url),
        Method::Delete => Request::delete(&prepared.url),
    };
    for (key, value) in &prepared.headers {
        builder = builder.header(key, value);
    }
    let request = match prepared.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((status, text))
}

#[cfg(not(feature = "hydrate"))]
async fn send(prepared: PreparedRequest) -> Result<(u16, String), ApiError> {
    let _ = prepared;
    Err(ApiError::Network("not available on server".to_owned()))
}
