//! Pop-up notices for action outcomes.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};
#[cfg(feature = "csr")]
use crate::state::notice::NOTICE_TTL_MS;

/// Show a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let text = text.into();
    match kind {
        NoticeKind::Success => log::info!("notice: {text}"),
        NoticeKind::Error => log::warn!("notice: {text}"),
    }
    let id = notices.try_update(|state| state.push(kind, text)).unwrap_or_default();
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
        notices.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Fixed-position stack of active notices.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-host" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("notice {}", notice.kind.css_modifier())>
                            <span class="notice__text">{notice.text}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| notices.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
