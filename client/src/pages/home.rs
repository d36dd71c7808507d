//! Home page: navbar with logout and a placeholder listings feed.

use leptos::prelude::*;

use crate::state::session::Session;

pub const FEED_PLACEHOLDER: &str = "Later we will show real items here from the backend.";

#[component]
pub fn HomePage(session: RwSignal<Session>) -> impl IntoView {
    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.update(Session::sign_out);
        leptos::logging::log!("signed out");
    };

    view! {
        <div class="home-page">
            <header class="navbar">
                <h2>"ElectroHub Marketplace"</h2>
                <button class="navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <main class="feed">
                <h3>"Recommended Listings"</h3>
                <p>{FEED_PLACEHOLDER}</p>
            </main>
        </div>
    }
}
