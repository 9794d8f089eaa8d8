//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::notice::NoticeHost;
use crate::pages::{
    checkout::CheckoutPage, contact::ContactPage, dashboard::DashboardPage, event_create::EventCreatePage,
    event_detail::EventDetailPage, event_edit::EventEditPage, events::EventsPage, home::HomePage, login::LoginPage,
    participants::ParticipantsPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::{auth::AuthState, notice::NoticeState};

/// Root application component.
///
/// Provides the shared auth and notice contexts, validates any stored
/// credential once on mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());
    provide_context(auth);
    provide_context(notices);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let mut gw = crate::net::api::gateway();
        let state = gw.restore().await;
        log::info!("client: session restored as {state:?}");
        crate::util::auth::sync_auth(auth, gw.session());
    });

    view! {
        <Title text="DEV EVENTS"/>

        <Router>
            <Navbar/>
            <NoticeHost/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("me") view=ProfilePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=(StaticSegment("events"), StaticSegment("create")) view=EventCreatePage/>
                    <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventDetailPage/>
                    <Route
                        path=(StaticSegment("events"), ParamSegment("id"), StaticSegment("edit"))
                        view=EventEditPage
                    />
                    <Route
                        path=(StaticSegment("events"), ParamSegment("id"), StaticSegment("participants"))
                        view=ParticipantsPage
                    />
                    <Route path=(StaticSegment("checkout"), ParamSegment("id")) view=CheckoutPage/>
                </Routes>
            </main>
        </Router>
    }
}
