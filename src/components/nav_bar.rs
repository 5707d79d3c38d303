//! Top navigation chrome: route links, theme toggle, identity, logout.

use leptos::prelude::*;

use crate::session::SessionContext;
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Navigation bar — hidden until the session has a signed-in profile.
/// The Users link is admin-only.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let monitor = expect_context::<SessionContext>();

    let identity = move || {
        session
            .get()
            .profile
            .map(|p| (p.name, p.role))
            .unwrap_or_else(|| ("me".to_owned(), "user".to_owned()))
    };

    let on_logout = move |_| {
        monitor.with_value(crate::session::SessionMonitor::logout);
    };

    view! {
        <Show when=move || session.get().profile.is_some()>
            <header class="nav-bar toolbar">
                <a class="toolbar__brand" href="/">
                    "Backoffice"
                </a>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <nav class="toolbar__links">
                    <Show when=move || session.get().is_admin()>
                        <a href="/users">"Users"</a>
                    </Show>
                    <a href="/projects">"Projects"</a>
                    <a href="/contacts">"Contacts"</a>
                    <a href="/volunteers">"Volunteers"</a>
                    <a href="/categories">"Categories"</a>
                    <a href="/transactions">"Transactions"</a>
                </nav>

                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__dark-toggle"
                    on:click=move |_| {
                        let current = ui.get().dark_mode;
                        let next = crate::util::dark_mode::toggle(current);
                        ui.update(|u| u.dark_mode = next);
                    }
                    title="Toggle dark mode"
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <span class="toolbar__self">
                    {move || identity().0}
                    " ("
                    <span class="toolbar__self-role">{move || identity().1}</span>
                    ")"
                </span>

                <button class="btn toolbar__logout" on:click=on_logout title="Sign out">
                    "Sign out"
                </button>
            </header>
        </Show>
    }
}
