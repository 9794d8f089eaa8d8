//! Login page: email + password against `/api/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gateway::{ApiError, LoginForm};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field::{FormAlert, TextField};
use crate::state::auth::AuthState;
use crate::util::auth::install_redirect;

pub(crate) const AFTER_LOGIN_PATH: &str = "/dashboard";

/// Message for a failed login: the first field error, else the backend's.
pub(crate) fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthenticated => "Invalid email or password.".to_owned(),
        ApiError::Validation { .. } => error
            .first_field_error(&["email", "password"])
            .unwrap_or_else(|| error.user_message()),
        other => other.user_message(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    // Already signed in: skip the form.
    Effect::new(move || {
        if auth.get().is_authenticated() {
            redirect.set(Some(AFTER_LOGIN_PATH.to_owned()));
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = LoginForm {
            email: email.get(),
            password: password.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let mut gw = crate::net::api::gateway();
            match gw.api().login(&request).await {
                Ok(auth_response) => {
                    gw.login(&auth_response.token, auth_response.user);
                    crate::util::auth::sync_auth(auth, gw.session());
                    redirect.set(Some(AFTER_LOGIN_PATH.to_owned()));
                }
                Err(e) => error.set(Some(login_error_message(&e))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to manage your events"</p>
                <form class="auth-form" on:submit=on_submit>
                    <FormAlert message=error/>
                    <TextField label="Email" name="email" kind="email" placeholder="you@example.com" value=email/>
                    <TextField label="Password" name="password" kind="password" value=password/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
