//! Edit-event page. Only the organizer gets a form; others see an error.

#[cfg(test)]
#[path = "event_edit_test.rs"]
mod event_edit_test;

use gateway::{ApiError, Event, EventForm, FieldErrors};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_panel::{ErrorPanel, PageStatus};
use crate::components::event_form::EventFormView;
use crate::components::require_auth::RequireAuth;
use crate::pages::event_create::{after_save_path, submission_errors};
use crate::pages::participants::parse_event_id;
use crate::state::auth::AuthState;
use crate::state::load::Load;
use crate::state::notice::NoticeState;
use crate::util::auth::install_redirect;

pub(crate) fn edit_load_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound(_) => "Event not found.".to_owned(),
        ApiError::Forbidden(_) => "You can only edit your own events.".to_owned(),
        other => format!("Could not load event. {}", other.user_message()),
    }
}

/// Pre-filled form, refused when the viewer is not the organizer.
pub(crate) fn editable_form(event: &Event, viewer_id: Option<u64>) -> Result<EventForm, String> {
    let owner_known = event.user_id.is_some() || event.user.as_ref().and_then(|u| u.id).is_some();
    match viewer_id {
        Some(id) if owner_known && !event.is_owned_by(id) => {
            Err("You can only edit your own events.".to_owned())
        }
        _ => Ok(EventForm::from_event(event)),
    }
}

#[component]
pub fn EventEditPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <EventEditView/>
        </RequireAuth>
    }
}

#[component]
fn EventEditView() -> impl IntoView {
    let params = use_params_map();
    let Some(event_id) = parse_event_id(params.with_untracked(|p| p.get("id"))) else {
        return view! { <ErrorPanel message="Invalid event id." back_href="/dashboard"/> }.into_any();
    };

    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let initial = RwSignal::new(Load::<EventForm>::Loading);
    let busy = RwSignal::new(false);
    let general_error = RwSignal::new(None::<String>);
    let errors = RwSignal::new(FieldErrors::new());
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        let result = gw.event(event_id).await;
        crate::util::auth::sync_auth(auth, gw.session());
        let viewer_id = gw.session().user().map(|u| u.id);
        initial.set(match result {
            Ok(event) => match editable_form(&event, viewer_id) {
                Ok(form) => Load::Ready(form),
                Err(message) => Load::Failed(message),
            },
            Err(e) => Load::Failed(edit_load_message(&e)),
        });
    });

    let on_submit = Callback::new(move |form: EventForm| {
        busy.set(true);
        general_error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::components::notice::notify;
            use crate::state::notice::NoticeKind;

            let mut gw = crate::net::api::gateway();
            let result = gw.update_event(event_id, &form).await;
            crate::util::auth::sync_auth(auth, gw.session());
            match result {
                Ok(updated) => {
                    notify(notices, NoticeKind::Success, "Event updated.");
                    let target = if updated.id == 0 { format!("/events/{event_id}") } else { after_save_path(&updated) };
                    redirect.set(Some(target));
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
            <h1>"Edit event"</h1>
            {move || match initial.get() {
                Load::Loading => view! { <PageStatus text="Loading event..."/> }.into_any(),
                Load::Failed(message) => {
                    view! { <ErrorPanel message=message back_href="/dashboard"/> }.into_any()
                }
                Load::Ready(form) => {
                    view! {
                        <EventFormView
                            initial=form
                            submit_label="Save changes"
                            busy=busy
                            general_error=general_error
                            errors=errors
                            on_submit=on_submit
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
        .into_any()
}
