//! Create-event page.
//!
//! The form validates locally; a 422 from the backend is spread back onto the
//! matching fields so the user sees the server's reason next to the input.

#[cfg(test)]
#[path = "event_create_test.rs"]
mod event_create_test;

use gateway::{ApiError, Event, EventForm, FieldErrors};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::event_form::EventFormView;
use crate::components::require_auth::RequireAuth;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::auth::install_redirect;

const FORM_FIELDS: [&str; 7] = ["title", "description", "date", "city", "price", "items", "image"];

/// Split a failed save into a form-wide message and per-field errors.
pub(crate) fn submission_errors(error: &ApiError) -> (Option<String>, FieldErrors) {
    let ApiError::Validation { message, fields } = error else {
        return (Some(error.user_message()), FieldErrors::new());
    };
    let mut found = FieldErrors::new();
    for name in FORM_FIELDS {
        let first = fields
            .iter()
            .find(|(key, _)| key.as_str() == name || key.starts_with(&format!("{name}.")))
            .and_then(|(_, messages)| messages.first());
        if let Some(text) = first {
            found.insert(name, text.clone());
        }
    }
    let general = found.is_empty().then(|| message.clone());
    (general, found)
}

/// Where to go once an event is saved.
pub(crate) fn after_save_path(event: &Event) -> String {
    if event.id == 0 {
        "/dashboard".to_owned()
    } else {
        format!("/events/{}", event.id)
    }
}

#[component]
pub fn EventCreatePage() -> impl IntoView {
    view! {
        <RequireAuth>
            <EventCreateView/>
        </RequireAuth>
    }
}

#[component]
fn EventCreateView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let busy = RwSignal::new(false);
    let general_error = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::new());
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    // Refresh the stored user before the form is used.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        if let Err(e) = gw.require_user().await {
            log::warn!("create event: {e}");
        }
        crate::util::auth::sync_auth(auth, gw.session());
    });

    let on_submit = Callback::new(move |form: EventForm| {
        busy.set(true);
        general_error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::components::notice::notify;
            use crate::state::notice::NoticeKind;

            let mut gw = crate::net::api::gateway();
            let result = gw.create_event(&form).await;
            crate::util::auth::sync_auth(auth, gw.session());
            match result {
                Ok(created) => {
                    log::info!("event created: id={}", created.id);
                    notify(notices, NoticeKind::Success, "Event created.");
                    redirect.set(Some(after_save_path(&created)));
                }
                Err(e) => {
                    let (general, fields) = submission_errors(&e);
                    general_error.set(general);
                    errors.set(fields);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        let _ = (form, auth, notices);
    });

    view! {
        <div class="event-form-page">
            <h1>"New event"</h1>
            <EventFormView
                initial=EventForm::default()
                submit_label="Create event"
                busy=busy
                general_error=general_error
                errors=errors
                on_submit=on_submit
            />
        </div>
    }
}
