//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once by the root component and handed to the login and home
//! screens as an `RwSignal<Session>`. Nothing is persisted: a reload starts
//! anonymous again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether a bearer token is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated,
}

/// In-memory session holding at most one bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Current bearer token, if signed in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn status(&self) -> SessionStatus {
        if self.is_authenticated() { SessionStatus::Authenticated } else { SessionStatus::Anonymous }
    }

    /// Store `token` and become authenticated.
    ///
    /// Returns `false` and leaves the session untouched when `token` is empty.
    pub fn sign_in(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if token.is_empty() {
            return false;
        }
        self.token = Some(token);
        true
    }

    /// Drop the token and return to anonymous.
    pub fn sign_out(&mut self) {
        self.token = None;
    }
}
