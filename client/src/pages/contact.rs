//! Contact page. Public; greets the visitor by name when a session is valid.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use gateway::User;
use leptos::prelude::*;

use crate::state::auth::AuthState;

pub(crate) const CONTACT_EMAIL: &str = "contato@devevents.com";

pub(crate) fn contact_greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Hi {}, how can we help?", user.display_name()),
        None => "How can we help?".to_owned(),
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let viewer = RwSignal::new(None::<User>);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        viewer.set(gw.current_user().await);
        crate::util::auth::sync_auth(auth, gw.session());
    });
    #[cfg(not(feature = "csr"))]
    let _ = auth;

    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <p class="contact-page__greeting">{move || contact_greeting(viewer.get().as_ref())}</p>
            <p>
                "Questions about an event or your account? Write to "
                <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                "."
            </p>
            <a class="btn" href="/events">"Browse events"</a>
        </div>
    }
}
