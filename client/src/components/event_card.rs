//! Card for an event in a list (public listing and dashboard).

use gateway::Event;
use leptos::prelude::*;

use crate::config;
use crate::util::format::{format_date, format_price};

#[component]
pub fn EventCard(
    event: Event,
    /// Owner actions (edit, participants, delete) for the dashboard.
    #[prop(optional)]
    on_delete: Option<Callback<u64>>,
) -> impl IntoView {
    let id = event.id;
    let href = format!("/events/{id}");
    let image = event.image_src(config::api_url());
    let date = format_date(&event.date);
    let price = format_price(event.price);
    let private = event.private;
    let owner_actions = on_delete.map(|on_delete| {
        view! {
            <div class="event-card__actions">
                <a class="btn" href=format!("/events/{id}/edit")>"Edit"</a>
                <a class="btn" href=format!("/events/{id}/participants")>"Participants"</a>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        }
    });

    view! {
        <article class="event-card">
            {image.map(|src| view! { <img class="event-card__image" src=src alt=""/> })}
            <a class="event-card__title" href=href>{event.title}</a>
            <p class="event-card__meta">
                <span>{date}</span>
                {event.city.map(|city| view! { <span>" · " {city}</span> })}
            </p>
            <p class="event-card__price">{price}</p>
            {private.then(|| view! { <span class="badge">"Private"</span> })}
            {owner_actions}
        </article>
    }
}
