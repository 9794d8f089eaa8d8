//! Create/edit event form shared by the create and edit pages.
//!
//! DESIGN
//! ======
//! Text inputs bind to their own signals; visibility, items, and the image
//! live in one `EventForm` signal so item editing goes through the same
//! helpers the multipart encoder uses. Validation runs locally first and the
//! page's submit callback only ever sees a valid form.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use gateway::{EventForm, FieldErrors, Upload};
use leptos::prelude::*;

use crate::components::field::{FormAlert, TextArea, TextField};

pub(crate) const IMAGE_READ_ERROR: &str = "Could not read the selected image; it was not attached.";

/// Store a freshly read image, or drop the pick and flag the image field.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn attach_image(form: &mut EventForm, errors: &mut FieldErrors, result: Result<Upload, String>) {
    match result {
        Ok(upload) => {
            form.image = Some(upload);
            errors.remove("image");
        }
        Err(e) => {
            log::warn!("event form: {e}");
            form.image = None;
            errors.insert("image", IMAGE_READ_ERROR.to_owned());
        }
    }
}

#[component]
pub fn EventFormView(
    initial: EventForm,
    #[prop(into)] submit_label: String,
    #[prop(into)] busy: Signal<bool>,
    /// Form-wide error from the backend.
    #[prop(into)]
    general_error: Signal<Option<String>>,
    /// Field errors; the page may also fill these from a 422.
    errors: RwSignal<FieldErrors>,
    on_submit: Callback<EventForm>,
) -> impl IntoView {
    let title = RwSignal::new(initial.title.clone());
    let description = RwSignal::new(initial.description.clone());
    let date = RwSignal::new(initial.date.clone());
    let city = RwSignal::new(initial.city.clone());
    let price = RwSignal::new(initial.price.clone());
    let form = RwSignal::new(initial);
    let new_item = RwSignal::new(String::new());

    let field_error = move |name: &'static str| Signal::derive(move || errors.get().get(name).cloned());

    let on_add_item = move |_: leptos::ev::MouseEvent| {
        let item = new_item.get();
        form.update(|f| {
            f.add_item(&item);
        });
        new_item.set(String::new());
    };

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;
            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::read_upload(file).await;
                errors.update(|errs| form.update(|f| attach_image(f, errs, result)));
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let candidate = EventForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            date: date.get_untracked(),
            city: city.get_untracked(),
            price: price.get_untracked(),
            ..form.get_untracked()
        };
        match candidate.validate() {
            Ok(()) => {
                errors.set(FieldErrors::new());
                on_submit.run(candidate);
            }
            Err(found) => errors.set(found),
        }
    };

    view! {
        <form class="event-form" on:submit=on_form_submit>
            <FormAlert message=general_error/>
            <TextField label="Title" name="title" value=title error=field_error("title")/>
            <TextArea label="Description" name="description" value=description error=field_error("description")/>
            <div class="event-form__row">
                <TextField label="Date" name="date" kind="date" value=date error=field_error("date")/>
                <TextField label="City" name="city" value=city error=field_error("city")/>
            </div>
            <TextField
                label="Price (leave empty for a free event)"
                name="price"
                kind="number"
                placeholder="0.00"
                value=price
                error=field_error("price")
            />
            <label class="field field--inline">
                <input
                    type="checkbox"
                    name="is_public"
                    prop:checked=move || form.get().is_public
                    on:change=move |ev| form.update(|f| f.is_public = event_target_checked(&ev))
                />
                <span>"Public event"</span>
            </label>

            <fieldset class="event-form__items">
                <legend>"What's included"</legend>
                <ul>
                    {move || {
                        form.get()
                            .items
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| {
                                view! {
                                    <li>
                                        <span>{item}</span>
                                        <button
                                            type="button"
                                            class="btn btn--small"
                                            on:click=move |_| form.update(|f| f.remove_item(index))
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
                <div class="event-form__row">
                    <input
                        class="field__input"
                        type="text"
                        placeholder="e.g. Coffee break"
                        prop:value=move || new_item.get()
                        on:input=move |ev| new_item.set(event_target_value(&ev))
                    />
                    <button type="button" class="btn" on:click=on_add_item>"Add"</button>
                </div>
            </fieldset>

            <label class="field">
                <span class="field__label">"Image"</span>
                <input type="file" accept="image/*" on:change=on_image_change/>
                {move || form.get().image.map(|upload| view! { <span class="field__hint">{upload.file_name}</span> })}
                {move || field_error("image").get().map(|msg| view! { <span class="field__error">{msg}</span> })}
            </label>

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving...".to_owned() } else { submit_label.clone() }}
            </button>
        </form>
    }
}
