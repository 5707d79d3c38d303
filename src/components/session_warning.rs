//! The "session about to expire" notice.
//!
//! Shown while the monitor is in its warning phase. The notice is not
//! dismissible: further activity never clears it, only the forced logout
//! (or a fresh profile load) does.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Fixed banner rendered above everything while the expiry warning is
/// active.
#[component]
pub fn SessionWarning() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().warning_visible>
            <div class="session-warning" role="alert">
                <span class="session-warning__title">"Session expiring"</span>
                " You have been inactive for a while; you are about to be signed out."
            </div>
        </Show>
    }
}
