//! Session activity monitoring: profile ownership and idle-timeout logout.
//!
//! ARCHITECTURE
//! ============
//! [`monitor::SessionMonitor`] is the single source of truth for "is there a
//! logged-in user". It is a plain state machine over four injected
//! capabilities — [`Scheduler`], [`ActivitySource`], [`Redirector`], and
//! [`CredentialStore`] — so the whole idle/warning/logout cycle unit-tests
//! without a browser. `browser` supplies the real DOM-backed capabilities
//! behind `#[cfg(feature = "hydrate")]`.
//!
//! The monitor handle is provided once at the application root and consumed
//! via `expect_context`; using it outside the provider is a programming
//! error and panics there.

pub mod browser;
pub mod monitor;

use std::time::Duration;

pub use monitor::{SessionContext, SessionMonitor};

/// Route the redirector sends the user to on forced logout.
pub const LOGIN_PATH: &str = "/login";

/// A pending delayed action. Dropping the handle cancels the action if it
/// has not fired yet; cancelling a fired or cancelled task is a no-op.
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Wrap a cancellation thunk produced by a [`Scheduler`].
    #[must_use]
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// An active registration on an [`ActivitySource`]. Dropping the handle
/// deregisters the underlying listeners.
pub struct ActivitySubscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl ActivitySubscription {
    #[must_use]
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self { unsubscribe: Some(Box::new(unsubscribe)) }
    }
}

impl Drop for ActivitySubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

/// Capability for scheduling a one-shot delayed task.
pub trait Scheduler {
    /// Arm `task` to run after `delay`. The returned handle cancels the
    /// task when dropped.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

/// Capability emitting a signal on every qualifying user interaction
/// (pointer movement, key press, click, scroll).
pub trait ActivitySource {
    /// Register `on_activity` for the source's lifetime; the returned
    /// subscription deregisters on drop.
    fn subscribe(&self, on_activity: Box<dyn Fn()>) -> ActivitySubscription;
}

/// Capability for sending the user to another page.
pub trait Redirector {
    fn redirect_to(&self, path: &str);
}

/// Persisted credential storage: one bearer token plus an optional role,
/// surviving page reloads. Owned exclusively by the session monitor.
pub trait CredentialStore {
    fn token(&self) -> Option<String>;
    fn role(&self) -> Option<String>;
    fn store(&self, token: &str, role: &str);
    fn clear(&self);
}

/// No-op capabilities for environments without a browser (SSR rendering of
/// the shell). The monitor stays in its anonymous state there.
pub struct InertScheduler;

impl Scheduler for InertScheduler {
    fn schedule(&self, _delay: Duration, _task: Box<dyn FnOnce()>) -> ScheduledTask {
        ScheduledTask::new(|| {})
    }
}

pub struct InertRedirector;

impl Redirector for InertRedirector {
    fn redirect_to(&self, _path: &str) {}
}

pub struct InertCredentialStore;

impl CredentialStore for InertCredentialStore {
    fn token(&self) -> Option<String> {
        None
    }

    fn role(&self) -> Option<String> {
        None
    }

    fn store(&self, _token: &str, _role: &str) {}

    fn clear(&self) {}
}
