//! Dashboard page listing the signed-in user's events.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Deletes are applied to the local
//! list only after the backend confirms, without refetching.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use gateway::Event;
use leptos::prelude::*;

use crate::components::error_panel::{ErrorPanel, PageStatus};
use crate::components::event_card::EventCard;
use crate::components::require_auth::RequireAuth;
use crate::state::auth::AuthState;
use crate::state::load::Load;
use crate::state::notice::NoticeState;

pub(crate) fn delete_prompt(events: &[Event], event_id: u64) -> String {
    match events.iter().find(|e| e.id == event_id) {
        Some(event) => format!("Delete \"{}\"? This cannot be undone.", event.title),
        None => "Delete this event? This cannot be undone.".to_owned(),
    }
}

pub(crate) fn greeting(auth: &AuthState) -> String {
    match auth.display_name() {
        Some(name) => format!("Hello, {name}"),
        None => "My events".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <DashboardView/>
        </RequireAuth>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let events = RwSignal::new(Load::<Vec<Event>>::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        let result = match gw.require_user().await {
            Ok(_) => gw.my_events().await,
            Err(e) => Err(e),
        };
        crate::util::auth::sync_auth(auth, gw.session());
        events.set(Load::from_result(result, gateway::ApiError::user_message));
    });

    let on_delete = Callback::new(move |event_id: u64| {
        let prompt = events.with_untracked(|load| {
            delete_prompt(load.ready().map(Vec::as_slice).unwrap_or_default(), event_id)
        });
        if !crate::util::browser::confirm(&prompt) {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::components::notice::notify;
            use crate::state::notice::NoticeKind;

            let mut gw = crate::net::api::gateway();
            let result = gw.delete_event(event_id).await;
            crate::util::auth::sync_auth(auth, gw.session());
            match result {
                Ok(()) => {
                    events.update(|load| {
                        if let Some(list) = load.ready_mut() {
                            gateway::remove_event(list, event_id);
                        }
                    });
                    notify(notices, NoticeKind::Success, "Event deleted.");
                }
                Err(e) => notify(notices, NoticeKind::Error, format!("Could not delete event: {}", e.user_message())),
            }
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = notices;

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || greeting(&auth.get())}</h1>
                <a class="btn btn--primary" href="/events/create">"+ New event"</a>
            </header>
            {move || match events.get() {
                Load::Loading => view! { <PageStatus text="Loading events..."/> }.into_any(),
                Load::Failed(message) => view! { <ErrorPanel message=message/> }.into_any(),
                Load::Ready(list) if list.is_empty() => {
                    view! {
                        <p class="dashboard-page__empty">
                            "You have no events yet. " <a href="/events/create">"Create one"</a>
                        </p>
                    }
                        .into_any()
                }
                Load::Ready(list) => {
                    view! {
                        <div class="dashboard-page__cards">
                            {list
                                .into_iter()
                                .map(|event| view! { <EventCard event=event on_delete=on_delete/> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
