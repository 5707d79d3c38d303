//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! The session monitor is built here once, bridged into a context signal
//! for reactive reads, and provided as a `StoredValue` handle for actions.
//! Pages consume both with `expect_context`; using them outside this
//! provider is a programming error.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::session_warning::SessionWarning;
use crate::pages::categories::CategoriesPage;
use crate::pages::contacts::ContactsPage;
use crate::pages::login::LoginPage;
use crate::pages::overview::OverviewPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::transactions::TransactionsPage;
use crate::pages::users::UsersPage;
use crate::pages::volunteers::VolunteersPage;
use crate::session::{SessionContext, SessionMonitor};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Build the session monitor with the capabilities this environment has:
/// real browser bindings under hydration, inert stand-ins on the server.
fn build_monitor() -> SessionMonitor {
    #[cfg(feature = "hydrate")]
    {
        SessionMonitor::new(
            Rc::new(crate::session::browser::TimeoutScheduler),
            Rc::new(crate::session::browser::WindowRedirector),
            Rc::new(crate::session::browser::BrowserCredentialStore),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionMonitor::new(
            Rc::new(crate::session::InertScheduler),
            Rc::new(crate::session::InertRedirector),
            Rc::new(crate::session::InertCredentialStore),
        )
    }
}

/// Root application component.
///
/// Provides the session and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    let monitor = build_monitor();
    monitor.set_observer(move |state| session.set(state.clone()));
    provide_context::<SessionContext>(StoredValue::new_local(monitor.clone()));

    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        monitor.attach_activity(&crate::session::browser::DocumentActivitySource);
        leptos::task::spawn_local(crate::session::browser::refresh_profile(monitor.clone()));

        let teardown = monitor.clone();
        on_cleanup(move || teardown.teardown());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // The server renders the loading shell; the profile fetch only
        // happens in the browser.
        drop(monitor);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/backoffice.css"/>
        <Title text="Backoffice"/>

        <Router>
            <NavBar/>
            <SessionWarning/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=OverviewPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("contacts") view=ContactsPage/>
                    <Route path=StaticSegment("volunteers") view=VolunteersPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("transactions") view=TransactionsPage/>
                </Routes>
            </main>
        </Router>
    }
}
