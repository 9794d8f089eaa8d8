//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior:
//! wait for startup validation, then send anonymous visitors to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use gateway::Session;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// True once auth has settled with no session.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.phase.should_redirect()
}

/// Redirect to `/login` whenever auth has settled and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Navigate whenever `target` is set, then clear it. Async handlers set the
/// signal instead of holding a navigate closure.
pub fn install_redirect<F>(target: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// Mirror the gateway session into the reactive auth state. Writes only when
/// something changed.
pub fn sync_auth(auth: RwSignal<AuthState>, session: &Session) {
    let next = AuthState::from_session(session);
    if auth.get_untracked() != next {
        auth.set(next);
    }
}
