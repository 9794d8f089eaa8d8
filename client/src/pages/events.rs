//! Public event listing with client-side search.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use gateway::Event;
use leptos::prelude::*;

use crate::components::error_panel::{ErrorPanel, PageStatus};
use crate::components::event_card::EventCard;
use crate::state::load::Load;

pub(crate) fn result_summary(shown: usize, total: usize, query: &str) -> String {
    if query.trim().is_empty() {
        return match total {
            0 => "No public events yet.".to_owned(),
            1 => "1 event".to_owned(),
            n => format!("{n} events"),
        };
    }
    match shown {
        0 => format!("No events match \"{}\".", query.trim()),
        1 => "1 event found".to_owned(),
        n => format!("{n} events found"),
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let events = RwSignal::new(Load::<Vec<Event>>::Loading);
    let search = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::api().public_events().await;
        events.set(Load::from_result(result, |e| {
            format!("Could not load public events. {}", e.user_message())
        }));
    });

    let visible = Memo::new(move |_| {
        events.with(|load| {
            load.ready()
                .map(|list| gateway::filter_events(list, &search.get()))
                .unwrap_or_default()
        })
    });

    view! {
        <div class="events-page">
            <h1>"Public events"</h1>
            <input
                class="field__input events-page__search"
                type="search"
                placeholder="Search by title, description or city..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            {move || match events.get() {
                Load::Loading => view! { <PageStatus text="Loading public events..."/> }.into_any(),
                Load::Failed(message) => view! { <ErrorPanel message=message/> }.into_any(),
                Load::Ready(all) => {
                    let shown = visible.get();
                    view! {
                        <p class="events-page__summary">
                            {result_summary(shown.len(), all.len(), &search.get())}
                        </p>
                        <div class="events-page__cards">
                            {shown.into_iter().map(|event| view! { <EventCard event=event/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
