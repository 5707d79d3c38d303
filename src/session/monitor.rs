//! The session activity monitor: profile cache plus idle-timeout logout.
//!
//! DESIGN
//! ======
//! A single-threaded state machine over the injected capabilities in the
//! parent module. The monitor owns at most one pending delayed action at a
//! time — the idle deadline while `Active`, the warning deadline while
//! `Warning` — and every re-arm cancels the previous handle before
//! scheduling the next one, so a stale timer can never fire a spurious
//! logout after activity has reset the cycle.
//!
//! Asynchronous profile fetches complete through [`RefreshTicket`]s carrying
//! the generation counter current when the fetch started; logout and
//! teardown bump the generation, so late completions are discarded instead
//! of resurrecting a terminated session.
//!
//! ERROR HANDLING
//! ==============
//! Profile-fetch failure is absorbed into "no profile"; nothing here throws
//! to callers. Capability callbacks must not call back into the monitor.

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{LocalStorage, StoredValue};

use super::{ActivitySource, ActivitySubscription, CredentialStore, LOGIN_PATH, Redirector, ScheduledTask, Scheduler};
use crate::net::types::Profile;
use crate::state::session::SessionState;

/// Inactivity span after which the expiry warning is shown.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Grace period between the expiry warning and the forced logout.
/// Intentionally short: the warning is a notice, not a negotiation.
pub const WARNING_GRACE: Duration = Duration::from_secs(5);

/// How the monitor handle travels through Leptos context. `StoredValue`
/// with local storage keeps the non-`Send` capability objects off the
/// thread-safe arena; consumers `expect_context::<SessionContext>()`.
pub type SessionContext = StoredValue<SessionMonitor, LocalStorage>;

/// Correlates an in-flight profile fetch with the monitor generation it
/// started under. A completion presented with a stale ticket is discarded.
#[derive(Clone, Copy, Debug)]
pub struct RefreshTicket {
    generation: u64,
}

/// Cloneable handle to the session activity monitor.
///
/// All handles share one state machine; the handle provided at the
/// application root is the only writer of session state in the crate.
#[derive(Clone)]
pub struct SessionMonitor {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    state: SessionState,
    /// Bumped on logout, login, and teardown to invalidate stale timers
    /// and in-flight fetch completions.
    generation: u64,
    /// The single pending deadline (idle or warning), if any.
    timer: Option<ScheduledTask>,
    activity: Option<ActivitySubscription>,
    torn_down: bool,
    scheduler: Rc<dyn Scheduler>,
    redirect: Rc<dyn Redirector>,
    store: Rc<dyn CredentialStore>,
    observer: Option<Rc<dyn Fn(&SessionState)>>,
}

/// Which deadline a scheduled task represents.
#[derive(Clone, Copy)]
enum Deadline {
    Idle,
    Warning,
}

impl SessionMonitor {
    /// Build a monitor in the anonymous, initial-loading state.
    #[must_use]
    pub fn new(scheduler: Rc<dyn Scheduler>, redirect: Rc<dyn Redirector>, store: Rc<dyn CredentialStore>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: SessionState::default(),
                generation: 0,
                timer: None,
                activity: None,
                torn_down: false,
                scheduler,
                redirect,
                store,
                observer: None,
            })),
        }
    }

    /// Register the single state observer (the context signal bridge).
    /// The observer is called after every state change and must not call
    /// back into the monitor.
    pub fn set_observer(&self, observer: impl Fn(&SessionState) + 'static) {
        self.inner.borrow_mut().observer = Some(Rc::new(observer));
    }

    /// Subscribe to `source` for the monitor's remaining lifetime. The
    /// registration is dropped (deregistered) on [`Self::teardown`].
    pub fn attach_activity(&self, source: &dyn ActivitySource) {
        let weak = Rc::downgrade(&self.inner);
        let subscription = source.subscribe(Box::new(move || {
            if let Some(rc) = weak.upgrade() {
                on_activity(&rc);
            }
        }));
        self.inner.borrow_mut().activity = Some(subscription);
    }

    /// Current cached profile; no side effect.
    #[must_use]
    pub fn profile(&self) -> Option<Profile> {
        self.inner.borrow().state.profile.clone()
    }

    /// True only during the first fetch after mount.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.borrow().state.loading
    }

    /// Whether the expiry warning is currently displayed.
    #[must_use]
    pub fn warning_visible(&self) -> bool {
        self.inner.borrow().state.warning_visible
    }

    /// Full state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    /// Stored bearer credential, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().store.token()
    }

    /// Persist a freshly issued credential (login). The caller follows up
    /// with a refresh to populate the profile.
    pub fn save_credential(&self, token: &str, role: &str) {
        self.inner.borrow().store.store(token, role);
    }

    /// Start a profile refresh: returns the ticket the eventual completion
    /// must present to [`Self::apply_profile`].
    #[must_use]
    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket { generation: self.inner.borrow().generation }
    }

    /// Complete a profile refresh. A `None` profile means the fetch failed
    /// or no credential was stored; either way the session collapses to
    /// anonymous without surfacing an error. Stale tickets are discarded.
    pub fn apply_profile(&self, ticket: RefreshTicket, profile: Option<Profile>) {
        apply_profile(&self.inner, ticket, profile);
    }

    /// Record a qualifying user-activity signal, restarting the idle
    /// deadline. Ignored while anonymous (no timer without a session) and
    /// while the warning is showing (activity does not dismiss it).
    pub fn note_activity(&self) {
        on_activity(&self.inner);
    }

    /// Terminate the session: cancel any pending deadline, clear the
    /// stored credential and cached profile, hide the warning, and redirect
    /// to the login screen. Safe to call when already logged out.
    pub fn logout(&self) {
        do_logout(&self.inner);
    }

    /// Release timers and activity listeners. After teardown no timer
    /// firing or activity signal can mutate state.
    pub fn teardown(&self) {
        let (timer, activity) = {
            let mut inner = self.inner.borrow_mut();
            inner.torn_down = true;
            inner.generation = inner.generation.wrapping_add(1);
            (inner.timer.take(), inner.activity.take())
        };
        drop(timer);
        drop(activity);
    }
}

/// Run the observer with a fresh snapshot, outside any inner borrow.
fn notify(rc: &Rc<RefCell<Inner>>) {
    let (observer, snapshot) = {
        let inner = rc.borrow();
        (inner.observer.clone(), inner.state.clone())
    };
    if let Some(observer) = observer {
        observer(&snapshot);
    }
}

/// Cancel any pending deadline, then arm `deadline` after `delay`.
/// Cancellation strictly precedes scheduling so only one deadline is ever
/// live.
fn arm_timer(rc: &Rc<RefCell<Inner>>, delay: Duration, deadline: Deadline) {
    let (scheduler, generation, cancelled) = {
        let mut inner = rc.borrow_mut();
        if inner.torn_down {
            return;
        }
        (Rc::clone(&inner.scheduler), inner.generation, inner.timer.take())
    };
    drop(cancelled);

    let weak = Rc::downgrade(rc);
    let task = scheduler.schedule(
        delay,
        Box::new(move || {
            let Some(rc) = weak.upgrade() else {
                return;
            };
            match deadline {
                Deadline::Idle => on_idle_deadline(&rc, generation),
                Deadline::Warning => on_warning_deadline(&rc, generation),
            }
        }),
    );
    rc.borrow_mut().timer = Some(task);
}

fn on_activity(rc: &Rc<RefCell<Inner>>) {
    {
        let inner = rc.borrow();
        if inner.torn_down || inner.state.profile.is_none() || inner.state.warning_visible {
            return;
        }
    }
    arm_timer(rc, IDLE_TIMEOUT, Deadline::Idle);
}

fn on_idle_deadline(rc: &Rc<RefCell<Inner>>, expected_generation: u64) {
    {
        let mut inner = rc.borrow_mut();
        if inner.torn_down || inner.generation != expected_generation {
            return;
        }
        if inner.state.profile.is_none() {
            return;
        }
        inner.state.warning_visible = true;
    }
    notify(rc);
    arm_timer(rc, WARNING_GRACE, Deadline::Warning);
}

fn on_warning_deadline(rc: &Rc<RefCell<Inner>>, expected_generation: u64) {
    {
        let inner = rc.borrow();
        if inner.torn_down || inner.generation != expected_generation {
            return;
        }
    }
    do_logout(rc);
}

fn apply_profile(rc: &Rc<RefCell<Inner>>, ticket: RefreshTicket, profile: Option<Profile>) {
    let (signed_in, cancelled) = {
        let mut inner = rc.borrow_mut();
        if inner.torn_down || inner.generation != ticket.generation {
            return;
        }
        inner.state.loading = false;
        inner.state.warning_visible = false;
        inner.state.profile = profile;
        (inner.state.profile.is_some(), inner.timer.take())
    };
    drop(cancelled);
    notify(rc);
    if signed_in {
        arm_timer(rc, IDLE_TIMEOUT, Deadline::Idle);
    }
}

fn do_logout(rc: &Rc<RefCell<Inner>>) {
    let (store, redirect, cancelled) = {
        let mut inner = rc.borrow_mut();
        if inner.torn_down {
            return;
        }
        let signed_in = inner.state.profile.is_some() || inner.state.warning_visible || inner.timer.is_some();
        if !signed_in {
            return;
        }
        inner.generation = inner.generation.wrapping_add(1);
        inner.state.profile = None;
        inner.state.warning_visible = false;
        (Rc::clone(&inner.store), Rc::clone(&inner.redirect), inner.timer.take())
    };
    drop(cancelled);
    store.clear();
    notify(rc);
    redirect.redirect_to(LOGIN_PATH);
}
