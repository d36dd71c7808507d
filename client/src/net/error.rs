//! HTTP failure taxonomy shared by the request layer and the screens.
//!
//! DESIGN
//! ======
//! `ApiError` keeps the raw cause (status, backend detail, transport message)
//! for logging, while `ApiErrorKind` is the small enumeration the UI branches
//! on when choosing what to tell the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Coarse failure category surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The backend rejected the submitted credentials or payload.
    InvalidCredentials,
    /// The request never produced an HTTP response.
    Network,
    /// The backend failed or answered with something unusable.
    Server,
}

/// Errors produced by HTTP client operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend responded with a non-success HTTP status.
    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A success response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Classify this error for the UI.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) => ApiErrorKind::Network,
            Self::Status { status: 400 | 401 | 403 | 422, .. } => ApiErrorKind::InvalidCredentials,
            Self::Status { .. } | Self::Parse(_) => ApiErrorKind::Server,
        }
    }

    /// Backend-provided detail text, when the error body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }
}

/// Pull the `detail` string out of a JSON error body such as
/// `{"detail": "Invalid email or password"}`.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_owned)
}
