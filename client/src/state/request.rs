//! Lifecycle of a user-triggered request.
//!
//! DESIGN
//! ======
//! A form owns one `RequestState` signal. `begin` refuses to start while a
//! request is pending, which is what keeps a double-clicked submit from
//! issuing two calls.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::net::error::{ApiError, ApiErrorKind};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to reach the server. Please try again.";
pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong on our side. Please try again later.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(ApiErrorKind),
}

impl RequestState {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Move to `Pending`. Returns `false` if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    /// Terminal state for a finished request.
    pub fn from_result<T>(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed(e.kind()),
        }
    }

    pub fn error_kind(self) -> Option<ApiErrorKind> {
        match self {
            Self::Failed(kind) => Some(kind),
            Self::Idle | Self::Pending | Self::Succeeded => None,
        }
    }

    /// User-facing text for a failed request.
    pub fn error_message(self) -> Option<&'static str> {
        self.error_kind().map(error_message)
    }
}

/// Message shown to the user for each failure kind.
pub fn error_message(kind: ApiErrorKind) -> &'static str {
    match kind {
        ApiErrorKind::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
        ApiErrorKind::Network => NETWORK_ERROR_MESSAGE,
        ApiErrorKind::Server => SERVER_ERROR_MESSAGE,
    }
}
