//! Login page with email + password credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the root while the session is anonymous. A successful login
//! writes the access token into the session, which flips the root over to
//! the home page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::{ApiError, ApiErrorKind};
use crate::net::http::HttpClient;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::AuthResponse;
use crate::state::request::RequestState;
use crate::state::session::Session;

pub const DEMO_EMAIL: &str = "demo@electrohub.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

/// Trim the email and require both fields before any network call.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Final request state plus the token to sign in with, if any.
#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(result: Result<AuthResponse, ApiError>) -> (RequestState, Option<String>) {
    let state = RequestState::from_result(&result);
    match result {
        Ok(resp) if resp.access_token.is_empty() => (RequestState::Failed(ApiErrorKind::Server), None),
        Ok(resp) => (state, Some(resp.access_token)),
        Err(_) => (state, None),
    }
}

/// Console line for a failed login, including the backend's `detail` text.
#[cfg(any(test, feature = "hydrate"))]
fn login_failure_log(err: &ApiError) -> String {
    match err.detail() {
        Some(detail) => format!("login failed: {err} ({detail})"),
        None => format!("login failed: {err}"),
    }
}

#[component]
pub fn LoginPage(session: RwSignal<Session>, client: HttpClient) -> impl IntoView {
    let email = RwSignal::new(DEMO_EMAIL.to_owned());
    let password = RwSignal::new(DEMO_PASSWORD.to_owned());
    let status = RwSignal::new(RequestState::default());
    let invalid_input = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    invalid_input.set(Some(message));
                    return;
                }
            };
        let mut started = false;
        status.update(|s| started = s.begin());
        if !started {
            return;
        }
        invalid_input.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&client, &email_value, &password_value).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("{}", login_failure_log(e));
                }
                let (next, token) = login_outcome(result);
                // Status first: signing in unmounts this page.
                status.set(next);
                if let Some(token) = token {
                    session.update(|s| {
                        s.sign_in(token);
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&client, email_value, password_value, session);
    };

    let error_text = move || invalid_input.get().or_else(|| status.get().error_message());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"ElectroHub"</h1>
                <p class="login-card__subtitle">"Buy & sell electronics in your area"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email address"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error_text().is_some()>
                        <div class="login-error">{move || error_text().unwrap_or_default()}</div>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || status.get().is_pending()>
                        {move || if status.get().is_pending() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
                <div class="login-helper">{format!("Demo: {DEMO_EMAIL} / {DEMO_PASSWORD}")}</div>
            </div>
        </div>
    }
}
