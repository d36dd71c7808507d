//! Root application component and SSR shell.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::net::http::HttpClient;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Top-level page shown for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
}

/// Login while anonymous, home once a token is held. No loading state.
pub fn screen_for(session: &Session) -> Screen {
    if session.is_authenticated() { Screen::Home } else { Screen::Login }
}

/// Root application component.
///
/// Owns the session and hands it to whichever page is showing: login while
/// anonymous, home once a token is held.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let client = HttpClient::same_origin();

    view! {
        <Title text="ElectroHub"/>
        <Show
            when=move || session.with(screen_for) == Screen::Home
            fallback=move || view! { <LoginPage session client=client.clone()/> }
        >
            <HomePage session/>
        </Show>
    }
}
