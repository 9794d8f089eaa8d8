//! Route guard for pages that need a session.
//!
//! Children mount only once startup validation has settled with a session,
//! so protected loaders never run for anonymous visitors.

use gateway::AuthPhase;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().phase == AuthPhase::Authenticated
            fallback=move || {
                view! {
                    <p class="page-status">
                        {move || {
                            if auth.get().phase == AuthPhase::Loading {
                                "Loading..."
                            } else {
                                "Redirecting to login..."
                            }
                        }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
