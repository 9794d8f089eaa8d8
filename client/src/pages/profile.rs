//! Profile page (`/me`, `/profile`): who the backend says you are.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use gateway::User;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_panel::{ErrorPanel, PageStatus};
use crate::components::require_auth::RequireAuth;
use crate::state::auth::AuthState;
use crate::state::load::Load;
use crate::util::auth::install_redirect;
use crate::util::format::member_since;

/// Initials shown in the avatar bubble; at most two letters.
pub(crate) fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "?".to_owned() } else { letters }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ProfileView/>
        </RequireAuth>
    }
}

#[component]
fn ProfileView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = RwSignal::new(Load::<User>::Loading);
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        let result = gw.require_user().await;
        crate::util::auth::sync_auth(auth, gw.session());
        profile.set(Load::from_result(result, gateway::ApiError::user_message));
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let mut gw = crate::net::api::gateway();
            gw.logout_remote().await;
            crate::util::auth::sync_auth(auth, gw.session());
            redirect.set(Some(crate::util::auth::LOGIN_PATH.to_owned()));
        });
    };
    #[cfg(not(feature = "csr"))]
    let _ = auth;

    view! {
        <div class="profile-page">
            {move || match profile.get() {
                Load::Loading => view! { <PageStatus text="Loading profile..."/> }.into_any(),
                Load::Failed(message) => view! { <ErrorPanel message=message/> }.into_any(),
                Load::Ready(user) => {
                    let since = member_since(user.created_at.as_deref());
                    view! {
                        <div class="profile-card">
                            <div class="profile-card__avatar">{initials(&user.name)}</div>
                            <h1>{user.name.clone()}</h1>
                            <p class="profile-card__email">{user.email.clone()}</p>
                            {since.map(|text| view! { <p class="profile-card__since">{text}</p> })}
                            <div class="profile-card__actions">
                                <a class="btn" href="/dashboard">"My events"</a>
                                <button class="btn btn--danger" on:click=on_logout disabled=move || busy.get()>
                                    {move || if busy.get() { "Logging out..." } else { "Log out" }}
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
