//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior: once the initial profile fetch has settled with no profile,
//! the user belongs on the login screen.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to `/login` whenever the session has loaded and no profile is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.profile.is_none() {
            navigate(crate::session::LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect non-admin users to the overview; admin-only routes apply this
/// in addition to [`install_unauth_redirect`].
pub fn install_admin_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.profile.is_some() && !state.is_admin() {
            navigate("/", NavigateOptions::default());
        }
    });
}
