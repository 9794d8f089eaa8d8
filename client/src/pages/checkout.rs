//! Checkout page: starts a payment and hands the browser to the provider.
//!
//! The browser only leaves the app when the backend returns a usable
//! `init_point`; every other outcome stays on this page with a notice.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use gateway::{ApiError, Event};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::error_panel::{ErrorPanel, PageStatus};
use crate::components::require_auth::RequireAuth;
use crate::pages::participants::parse_event_id;
use crate::state::auth::AuthState;
use crate::state::load::Load;
use crate::state::notice::NoticeState;
use crate::util::format::format_price;

/// What to do with a checkout response.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CheckoutOutcome {
    Redirect(String),
    Report(String),
}

pub(crate) fn checkout_outcome(result: Result<String, ApiError>) -> CheckoutOutcome {
    match result {
        Ok(url) => CheckoutOutcome::Redirect(url),
        Err(ApiError::MissingInitPoint) => CheckoutOutcome::Report("Invalid payment link.".to_owned()),
        Err(e) => CheckoutOutcome::Report(format!("Could not start payment. {}", e.user_message())),
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <CheckoutView/>
        </RequireAuth>
    }
}

#[component]
fn CheckoutView() -> impl IntoView {
    let params = use_params_map();
    let Some(event_id) = parse_event_id(params.with_untracked(|p| p.get("id"))) else {
        return view! { <ErrorPanel message="Invalid event id." back_href="/events"/> }.into_any();
    };

    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let event = RwSignal::new(Load::<Event>::Loading);
    let paying = RwSignal::new(false);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        let result = gw.event(event_id).await;
        crate::util::auth::sync_auth(auth, gw.session());
        event.set(Load::from_result(result, |_| "Event not found.".to_owned()));
    });

    let on_pay = move |_: leptos::ev::MouseEvent| {
        if paying.get_untracked() {
            return;
        }
        paying.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let mut gw = crate::net::api::gateway();
            let result = gw.start_checkout(event_id).await;
            crate::util::auth::sync_auth(auth, gw.session());
            match checkout_outcome(result) {
                CheckoutOutcome::Redirect(url) => {
                    log::info!("checkout: redirecting to payment provider");
                    crate::util::browser::redirect_external(&url);
                }
                CheckoutOutcome::Report(message) => {
                    use crate::components::notice::notify;
                    use crate::state::notice::NoticeKind;
                    notify(notices, NoticeKind::Error, message);
                }
            }
            paying.set(false);
        });
    };
    #[cfg(not(feature = "csr"))]
    let _ = (auth, notices);

    view! {
        <div class="checkout-page">
            <h1>"Checkout"</h1>
            {move || match event.get() {
                Load::Loading => view! { <PageStatus text="Loading checkout..."/> }.into_any(),
                Load::Failed(message) => {
                    view! { <ErrorPanel message=message back_href="/events"/> }.into_any()
                }
                Load::Ready(details) => {
                    view! {
                        <div class="checkout-page__summary">
                            <p class="checkout-page__title">{details.title.clone()}</p>
                            <p>"Amount: " <strong>{format_price(details.price)}</strong></p>
                        </div>
                        <button class="btn btn--primary" disabled=move || paying.get() on:click=on_pay>
                            {move || if paying.get() { "Redirecting..." } else { "Pay now" }}
                        </button>
                    }
                        .into_any()
                }
            }}
            <button class="btn btn--link" on:click=|_| crate::util::browser::go_back()>
                "Back"
            </button>
        </div>
    }
        .into_any()
}
