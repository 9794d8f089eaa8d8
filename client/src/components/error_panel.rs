//! Blocking error view for failed initial page loads.

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(optional, into)] back_href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h2 class="error-panel__title">"Something went wrong"</h2>
            <p class="error-panel__message">{message}</p>
            {back_href.map(|href| view! { <a class="btn error-panel__back" href=href>"Go back"</a> })}
        </div>
    }
}

/// Centered status line for loading and redirect states.
#[component]
pub fn PageStatus(#[prop(into)] text: String) -> impl IntoView {
    view! { <p class="page-status">{text}</p> }
}
