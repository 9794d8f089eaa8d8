//! Participant list for one event, with join / leave / pay actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owner view of `/api/events/:id/participants`. Join and leave update the
//! local roster after the backend confirms; paid events route to checkout
//! instead of joining directly.

#[cfg(test)]
#[path = "participants_test.rs"]
mod participants_test;

use gateway::{ApiError, Event, Roster};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_panel::{ErrorPanel, PageStatus};
use crate::components::require_auth::RequireAuth;
use crate::state::auth::AuthState;
use crate::state::load::Load;
use crate::state::notice::NoticeState;
use crate::util::format::format_price;

/// What the primary button on an event does for the current user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ParticipationAction {
    Join,
    Pay(f64),
    Leave,
}

impl ParticipationAction {
    pub(crate) fn label(self) -> String {
        match self {
            Self::Join => "Join for free".to_owned(),
            Self::Pay(price) => format!("Buy ticket ({})", format_price(price)),
            Self::Leave => "Leave event".to_owned(),
        }
    }
}

/// Leave when already on the roster, otherwise pay or join depending on the
/// event price. Unknown event details fall back to a plain join.
pub(crate) fn participation_action(
    event: Option<&Event>,
    roster: &Roster,
    user_id: Option<u64>,
) -> ParticipationAction {
    if user_id.is_some_and(|id| roster.contains(id)) {
        return ParticipationAction::Leave;
    }
    match event {
        Some(event) if event.requires_payment() => ParticipationAction::Pay(event.price),
        _ => ParticipationAction::Join,
    }
}

pub(crate) fn participants_error_message(error: &ApiError) -> String {
    match error {
        ApiError::NotFound(_) => "Event not found.".to_owned(),
        ApiError::Forbidden(_) => "You do not have permission to view this event.".to_owned(),
        other => format!("Could not load participants. {}", other.user_message()),
    }
}

pub(crate) fn parse_event_id(raw: Option<String>) -> Option<u64> {
    raw.and_then(|id| id.trim().parse().ok())
}

pub(crate) fn checkout_path(event_id: u64) -> String {
    format!("/checkout/{event_id}")
}

#[component]
pub fn ParticipantsPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <ParticipantsView/>
        </RequireAuth>
    }
}

#[component]
fn ParticipantsView() -> impl IntoView {
    let params = use_params_map();
    let Some(event_id) = parse_event_id(params.with_untracked(|p| p.get("id"))) else {
        return view! { <ErrorPanel message="Invalid event id." back_href="/events"/> }.into_any();
    };

    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let roster = RwSignal::new(Load::<Roster>::Loading);
    let event = RwSignal::new(None::<Event>);
    let busy = RwSignal::new(false);
    let redirect = RwSignal::new(None::<String>);
    crate::util::auth::install_redirect(redirect, leptos_router::hooks::use_navigate());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        let result = gw.participants(event_id).await.map(Roster::new);
        crate::util::auth::sync_auth(auth, gw.session());
        roster.set(Load::from_result(result, participants_error_message));

        // Event details only refine the action button; failures stay quiet.
        match gw.event(event_id).await {
            Ok(details) => event.set(Some(details)),
            Err(e) => log::debug!("participants: event details unavailable: {e}"),
        }
        crate::util::auth::sync_auth(auth, gw.session());
    });

    let action = Memo::new(move |_| {
        roster.with(|load| {
            load.ready()
                .map(|list| participation_action(event.get().as_ref(), list, auth.get().user_id()))
        })
    });

    let on_action = move |_: leptos::ev::MouseEvent| {
        let Some(current) = action.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        if let ParticipationAction::Pay(_) = current {
            redirect.set(Some(checkout_path(event_id)));
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::components::notice::notify;
            use crate::state::notice::NoticeKind;

            let mut gw = crate::net::api::gateway();
            let user = auth.get_untracked().user;
            let result = match current {
                ParticipationAction::Leave => gw.leave_event(event_id).await,
                _ => gw.join_event(event_id).await,
            };
            crate::util::auth::sync_auth(auth, gw.session());
            match (result, user) {
                (Ok(()), Some(user)) => {
                    roster.update(|load| {
                        if let Some(list) = load.ready_mut() {
                            if current == ParticipationAction::Leave {
                                list.leave(user.id);
                            } else {
                                list.join(&user);
                            }
                        }
                    });
                    let text = if current == ParticipationAction::Leave {
                        "You left the event."
                    } else {
                        "You joined the event!"
                    };
                    notify(notices, NoticeKind::Success, text);
                }
                (Ok(()), None) => notify(notices, NoticeKind::Success, "Done."),
                (Err(e), _) => notify(notices, NoticeKind::Error, e.user_message()),
            }
            busy.set(false);
        });
    };
    #[cfg(not(feature = "csr"))]
    let _ = notices;

    view! {
        <div class="participants-page">
            <header class="participants-page__header">
                <h1>
                    {move || {
                        event
                            .get()
                            .map_or_else(|| format!("Event #{event_id}"), |e| e.title)
                    }}
                </h1>
                <a class="btn" href=format!("/events/{event_id}")>"Event details"</a>
            </header>
            {move || match roster.get() {
                Load::Loading => view! { <PageStatus text="Loading participants..."/> }.into_any(),
                Load::Failed(message) => {
                    view! { <ErrorPanel message=message back_href="/dashboard"/> }.into_any()
                }
                Load::Ready(list) => {
                    view! {
                        <p class="participants-page__count">{format!("{} participant(s)", list.len())}</p>
                        <ul class="participants-page__list">
                            {list
                                .into_inner()
                                .into_iter()
                                .map(|p| view! { <li>{p.name}</li> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
            {move || {
                action
                    .get()
                    .map(|current| {
                        view! {
                            <button
                                class="btn btn--primary"
                                class:btn--danger=current == ParticipationAction::Leave
                                disabled=move || busy.get()
                                on:click=on_action
                            >
                                {move || if busy.get() { "Please wait...".to_owned() } else { current.label() }}
                            </button>
                        }
                    })
            }}
        </div>
    }
        .into_any()
}
