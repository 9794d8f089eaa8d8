//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <div class="welcome-card">
                <h1>"DEV EVENTS"</h1>
                <p>
                    {move || match auth.get().display_name() {
                        Some(name) => format!("Welcome back, {name}."),
                        None => "Find and organize events for developers.".to_owned(),
                    }}
                </p>
                <div class="welcome-card__actions">
                    <a class="btn btn--primary" href="/dashboard">"My events"</a>
                    <a class="btn" href="/profile">"Profile"</a>
                    <a class="btn btn--link" href="/events">"Browse events"</a>
                </div>
            </div>
        </div>
    }
}
