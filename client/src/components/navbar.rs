//! Top navigation bar.
//!
//! Links depend on auth: anonymous visitors see login/register, signed-in
//! users see their events, event creation, and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_redirect;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());
    let busy = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let mut gw = crate::net::api::gateway();
            gw.logout_remote().await;
            crate::util::auth::sync_auth(auth, gw.session());
            busy.set(false);
            redirect.set(Some(crate::util::auth::LOGIN_PATH.to_owned()));
        });
    };

    view! {
        <header class="navbar">
            <nav class="navbar__inner">
                <a class="navbar__brand" href="/">
                    <span>"DEV EVENTS"</span>
                </a>
                <ul class="navbar__links">
                    <li><a href="/events">"Events"</a></li>
                    <Show when=move || auth.get().is_authenticated()>
                        <li><a href="/events/create">"Create event"</a></li>
                    </Show>
                    <li><a href="/contact">"Contact"</a></li>
                </ul>
                <div class="navbar__auth">
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login">"Log in"</a>
                                <a class="btn btn--primary" href="/register">"Sign up"</a>
                            }
                        }
                    >
                        <a href="/dashboard">"My events"</a>
                        <a class="navbar__user" href="/profile">
                            {move || auth.get().display_name().unwrap_or_default()}
                        </a>
                        <button class="btn btn--danger" on:click=on_logout disabled=move || busy.get()>
                            "Log out"
                        </button>
                    </Show>
                </div>
            </nav>
        </header>
    }
}
