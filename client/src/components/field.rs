//! Labelled form inputs with an inline error slot.

use leptos::prelude::*;

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional, into)] kind: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(into, default = Signal::derive(|| None))] error: Signal<Option<String>>,
) -> impl IntoView {
    let kind = kind.unwrap_or_else(|| "text".to_owned());
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                type=kind
                name=name
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(into, default = Signal::derive(|| None))] error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                name=name
                rows="4"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}

/// Inline alert for a form-wide message.
#[component]
pub fn FormAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! { <div class="alert alert--error" role="alert">{msg}</div> })}
    }
}
