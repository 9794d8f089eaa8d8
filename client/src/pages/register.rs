//! Registration page: `/api/register`, then straight into a session.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use gateway::{ApiError, RegisterForm};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::field::{FormAlert, TextField};
use crate::pages::login::AFTER_LOGIN_PATH;
use crate::state::auth::AuthState;
use crate::util::auth::install_redirect;

pub(crate) fn register_error_message(error: &ApiError) -> String {
    error
        .first_field_error(&["name", "email", "password"])
        .unwrap_or_else(|| error.user_message())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = RegisterForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            password_confirmation: confirmation.get(),
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
            match gw.api().register(&request).await {
                Ok(auth_response) => {
                    gw.login(&auth_response.token, auth_response.user);
                    crate::util::auth::sync_auth(auth, gw.session());
                    redirect.set(Some(AFTER_LOGIN_PATH.to_owned()));
                }
                Err(e) => error.set(Some(register_error_message(&e))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (request, auth);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <FormAlert message=error/>
                    <TextField label="Name" name="name" value=name/>
                    <TextField label="Email" name="email" kind="email" value=email/>
                    <TextField label="Password" name="password" kind="password" value=password/>
                    <TextField
                        label="Confirm password"
                        name="password_confirmation"
                        kind="password"
                        value=confirmation
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
