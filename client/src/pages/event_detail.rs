//! Public event detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Readable without a session. When the visitor is signed in, the soft
//! `current_user` check decides whether owner actions (edit, delete,
//! participants) are offered. The three loads are independent and a failed
//! user or participant fetch never blocks the page.

#[cfg(test)]
#[path = "event_detail_test.rs"]
mod event_detail_test;

use gateway::{Event, Participant, User};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::error_panel::{ErrorPanel, PageStatus};
use crate::config;
use crate::pages::participants::parse_event_id;
use crate::state::auth::AuthState;
use crate::state::load::Load;
use crate::state::notice::NoticeState;
use crate::util::auth::install_redirect;
use crate::util::format::{format_date, format_price};

/// Links and buttons offered for an event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DetailActions {
    pub can_manage: bool,
    pub can_participate: bool,
}

pub(crate) fn detail_actions(event: &Event, viewer: Option<&User>) -> DetailActions {
    match viewer {
        Some(user) => DetailActions {
            can_manage: event.is_owned_by(user.id),
            can_participate: true,
        },
        None => DetailActions::default(),
    }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let Some(event_id) = parse_event_id(params.with_untracked(|p| p.get("id"))) else {
        return view! { <ErrorPanel message="Invalid event id." back_href="/events"/> }.into_any();
    };

    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let event = RwSignal::new(Load::<Event>::Loading);
    let participants = RwSignal::new(Vec::<Participant>::new());
    let viewer = RwSignal::new(None::<User>);
    let redirect = RwSignal::new(None::<String>);
    install_redirect(redirect, use_navigate());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        viewer.set(gw.current_user().await);
        crate::util::auth::sync_auth(auth, gw.session());

        let result = gw.api().public_event(event_id).await;
        if let Err(e) = &result {
            log::warn!("event detail: {e}");
        }
        event.set(Load::from_result(result, |_| "Event not found or unavailable.".to_owned()));

        match gw.api().public_participants(event_id).await {
            Ok(list) => participants.set(list),
            Err(e) => log::debug!("event detail: participants unavailable: {e}"),
        }
    });

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if !crate::util::browser::confirm("Are you sure you want to delete this event?") {
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
                    notify(notices, NoticeKind::Success, "Event deleted.");
                    redirect.set(Some("/dashboard".to_owned()));
                }
                Err(e) => notify(notices, NoticeKind::Error, format!("Could not delete event: {}", e.user_message())),
            }
        });
    };
    #[cfg(not(feature = "csr"))]
    let _ = (auth, notices);

    view! {
        <div class="event-detail-page">
            <a class="btn btn--link" href="/events">"← All events"</a>
            {move || match event.get() {
                Load::Loading => view! { <PageStatus text="Loading event..."/> }.into_any(),
                Load::Failed(message) => {
                    view! { <ErrorPanel message=message back_href="/events"/> }.into_any()
                }
                Load::Ready(details) => {
                    let actions = detail_actions(&details, viewer.get().as_ref());
                    let image = details.image_src(config::api_url());
                    let has_items = !details.items.is_empty();
                    view! {
                        <article class="event-detail">
                            {image.map(|src| view! { <img class="event-detail__image" src=src alt=""/> })}
                            <h1>{details.title.clone()}</h1>
                            <p class="event-detail__meta">
                                <span>{format_date(&details.date)}</span>
                                {details.city.clone().map(|city| view! { <span>" · " {city}</span> })}
                                {details
                                    .organizer_name()
                                    .map(|name| view! { <span>" · by " {name.to_owned()}</span> })}
                            </p>
                            <p class="event-detail__price">{format_price(details.price)}</p>
                            <p class="event-detail__description">
                                {details.description.clone().unwrap_or_default()}
                            </p>
                            <Show when=move || has_items>
                                <h2>"What's included"</h2>
                            </Show>
                            <ul class="event-detail__items">
                                {details.items.iter().cloned().map(|item| view! { <li>{item}</li> }).collect_view()}
                            </ul>
                            <section class="event-detail__participants">
                                <h2>{move || format!("Participants ({})", participants.get().len())}</h2>
                                <ul>
                                    {move || {
                                        participants
                                            .get()
                                            .into_iter()
                                            .map(|p| view! { <li>{p.name}</li> })
                                            .collect_view()
                                    }}
                                </ul>
                            </section>
                            <div class="event-detail__actions">
                                {actions
                                    .can_participate
                                    .then(|| {
                                        view! {
                                            <a class="btn btn--primary" href=format!("/events/{event_id}/participants")>
                                                "Participate"
                                            </a>
                                        }
                                    })}
                                {actions
                                    .can_manage
                                    .then(|| {
                                        view! {
                                            <a class="btn" href=format!("/events/{event_id}/edit")>"Edit"</a>
                                            <button class="btn btn--danger" on:click=on_delete>"Delete"</button>
                                        }
                                    })}
                                {(!actions.can_participate)
                                    .then(|| view! { <a class="btn" href="/login">"Log in to participate"</a> })}
                            </div>
                        </article>
                    }
                        .into_any()
                }
            }}
        </div>
    }
        .into_any()
}
