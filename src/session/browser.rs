//! Browser-backed session capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the hydrate-only implementations of the capability traits in
//! the parent module: real DOM listeners, `gloo` timeouts, `localStorage`,
//! and `window.location`. SSR renders the shell with the inert
//! implementations instead, so nothing here runs on the server.

use super::SessionMonitor;
use crate::net::api;

#[cfg(feature = "hydrate")]
use super::{ActivitySource, ActivitySubscription, CredentialStore, Redirector, ScheduledTask, Scheduler};

/// Events counted as qualifying user activity.
#[cfg(feature = "hydrate")]
const ACTIVITY_EVENTS: [&str; 5] = ["mousemove", "keydown", "mousedown", "scroll", "touchstart"];

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "backoffice_token";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "backoffice_role";

/// One-shot delayed tasks via `setTimeout` (`gloo` wrapper). Dropping the
/// returned handle clears the timeout.
#[cfg(feature = "hydrate")]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: std::time::Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = gloo_timers::callback::Timeout::new(millis, move || task());
        ScheduledTask::new(move || drop(timeout))
    }
}

/// Document-level activity listeners for the monitor's lifetime.
#[cfg(feature = "hydrate")]
pub struct DocumentActivitySource;

#[cfg(feature = "hydrate")]
impl ActivitySource for DocumentActivitySource {
    fn subscribe(&self, on_activity: Box<dyn Fn()>) -> ActivitySubscription {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return ActivitySubscription::new(|| {});
        };

        let closure = Closure::wrap(Box::new(move || on_activity()) as Box<dyn FnMut()>);
        for event in ACTIVITY_EVENTS {
            let _ = document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }

        ActivitySubscription::new(move || {
            for event in ACTIVITY_EVENTS {
                let _ = document.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
            drop(closure);
        })
    }
}

/// Page navigation through `window.location`.
#[cfg(feature = "hydrate")]
pub struct WindowRedirector;

#[cfg(feature = "hydrate")]
impl Redirector for WindowRedirector {
    fn redirect_to(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// Bearer token + role persisted in `localStorage`.
#[cfg(feature = "hydrate")]
pub struct BrowserCredentialStore;

#[cfg(feature = "hydrate")]
impl CredentialStore for BrowserCredentialStore {
    fn token(&self) -> Option<String> {
        crate::util::storage::load_string(TOKEN_KEY)
    }

    fn role(&self) -> Option<String> {
        crate::util::storage::load_string(ROLE_KEY)
    }

    fn store(&self, token: &str, role: &str) {
        crate::util::storage::save_string(TOKEN_KEY, token);
        crate::util::storage::save_string(ROLE_KEY, role);
    }

    fn clear(&self) {
        crate::util::storage::remove(TOKEN_KEY);
        crate::util::storage::remove(ROLE_KEY);
    }
}

/// Re-fetch the profile with the stored credential and apply the outcome.
///
/// Any failure — missing credential, rejection, network trouble — resolves
/// to "no profile"; nothing is surfaced to the caller. A logout or teardown
/// racing the fetch wins: the completion is then discarded by its ticket.
pub async fn refresh_profile(monitor: SessionMonitor) {
    let ticket = monitor.begin_refresh();
    let profile = match monitor.token() {
        Some(token) => api::fetch_profile(&token).await,
        None => None,
    };
    monitor.apply_profile(ticket, profile);
}
