use super::*;
use std::cell::Cell;

// =============================================================
// Fake capabilities
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum TimerEvent {
    Scheduled { index: usize, delay: Duration },
    Cancelled { index: usize },
}

struct TimerSlot {
    delay: Duration,
    run: Option<Box<dyn FnOnce()>>,
}

#[derive(Default)]
struct TimerBox {
    slots: Vec<TimerSlot>,
    events: Vec<TimerEvent>,
}

struct FakeScheduler {
    timers: Rc<RefCell<TimerBox>>,
}

impl Scheduler for FakeScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let index = {
            let mut timers = self.timers.borrow_mut();
            let index = timers.slots.len();
            timers.slots.push(TimerSlot { delay, run: Some(task) });
            timers.events.push(TimerEvent::Scheduled { index, delay });
            index
        };
        let timers = Rc::clone(&self.timers);
        ScheduledTask::new(move || {
            let mut timers = timers.borrow_mut();
            if timers.slots[index].run.take().is_some() {
                timers.events.push(TimerEvent::Cancelled { index });
            }
        })
    }
}

#[derive(Default)]
struct ActivityHub {
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
    unsubscribed: Cell<usize>,
}

impl ActivityHub {
    fn emit(&self) {
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}

impl ActivitySource for Rc<ActivityHub> {
    fn subscribe(&self, on_activity: Box<dyn Fn()>) -> ActivitySubscription {
        self.listeners.borrow_mut().push(on_activity);
        let hub = Rc::clone(self);
        ActivitySubscription::new(move || {
            hub.listeners.borrow_mut().clear();
            hub.unsubscribed.set(hub.unsubscribed.get() + 1);
        })
    }
}

struct FakeStore {
    token: Rc<RefCell<Option<String>>>,
    role: Rc<RefCell<Option<String>>>,
    clears: Rc<Cell<usize>>,
}

impl CredentialStore for FakeStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn role(&self) -> Option<String> {
        self.role.borrow().clone()
    }

    fn store(&self, token: &str, role: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
        *self.role.borrow_mut() = Some(role.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.role.borrow_mut() = None;
        self.clears.set(self.clears.get() + 1);
    }
}

struct FakeRedirector {
    log: Rc<RefCell<Vec<String>>>,
}

impl Redirector for FakeRedirector {
    fn redirect_to(&self, path: &str) {
        self.log.borrow_mut().push(path.to_owned());
    }
}

// =============================================================
// Harness
// =============================================================

struct Harness {
    monitor: SessionMonitor,
    timers: Rc<RefCell<TimerBox>>,
    activity: Rc<ActivityHub>,
    redirects: Rc<RefCell<Vec<String>>>,
    token: Rc<RefCell<Option<String>>>,
    clears: Rc<Cell<usize>>,
    observed: Rc<RefCell<Vec<SessionState>>>,
}

fn harness() -> Harness {
    let timers = Rc::new(RefCell::new(TimerBox::default()));
    let redirects = Rc::new(RefCell::new(Vec::new()));
    let token = Rc::new(RefCell::new(None));
    let role = Rc::new(RefCell::new(None));
    let clears = Rc::new(Cell::new(0));
    let observed = Rc::new(RefCell::new(Vec::new()));

    let monitor = SessionMonitor::new(
        Rc::new(FakeScheduler { timers: Rc::clone(&timers) }),
        Rc::new(FakeRedirector { log: Rc::clone(&redirects) }),
        Rc::new(FakeStore { token: Rc::clone(&token), role, clears: Rc::clone(&clears) }),
    );
    let observer_log = Rc::clone(&observed);
    monitor.set_observer(move |state| observer_log.borrow_mut().push(state.clone()));

    let activity = Rc::new(ActivityHub::default());
    monitor.attach_activity(&activity);

    Harness { monitor, timers, activity, redirects, token, clears, observed }
}

fn profile() -> Profile {
    Profile {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.org".to_owned(),
        role: "admin".to_owned(),
    }
}

/// Simulate a successful credentialed mount: token present, fetch resolves.
fn sign_in(h: &Harness) {
    *h.token.borrow_mut() = Some("tok-1".to_owned());
    let ticket = h.monitor.begin_refresh();
    h.monitor.apply_profile(ticket, Some(profile()));
}

fn pending(h: &Harness) -> Vec<usize> {
    h.timers
        .borrow()
        .slots
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.run.is_some().then_some(i))
        .collect()
}

/// Fire the single pending timer, asserting exactly one is live.
fn fire_pending(h: &Harness) {
    let live = pending(h);
    assert_eq!(live.len(), 1, "expected exactly one pending timer, got {live:?}");
    let run = h.timers.borrow_mut().slots[live[0]].run.take().expect("timer raced away");
    run();
}

// =============================================================
// P1: at most one timer pending, cancel strictly before schedule
// =============================================================

#[test]
fn activity_signals_keep_a_single_pending_timer() {
    let h = harness();
    sign_in(&h);
    assert_eq!(pending(&h).len(), 1);

    for _ in 0..3 {
        h.activity.emit();
        assert_eq!(pending(&h).len(), 1);
    }
}

#[test]
fn each_reset_cancels_the_previous_timer_before_scheduling() {
    let h = harness();
    sign_in(&h);
    h.activity.emit();
    h.activity.emit();

    let events = h.timers.borrow().events.clone();
    assert_eq!(
        events,
        vec![
            TimerEvent::Scheduled { index: 0, delay: IDLE_TIMEOUT },
            TimerEvent::Cancelled { index: 0 },
            TimerEvent::Scheduled { index: 1, delay: IDLE_TIMEOUT },
            TimerEvent::Cancelled { index: 1 },
            TimerEvent::Scheduled { index: 2, delay: IDLE_TIMEOUT },
        ]
    );
}

// =============================================================
// P2: no timer without a session
// =============================================================

#[test]
fn activity_while_anonymous_arms_nothing() {
    let h = harness();
    let ticket = h.monitor.begin_refresh();
    h.monitor.apply_profile(ticket, None);

    h.activity.emit();
    h.activity.emit();

    assert!(h.timers.borrow().slots.is_empty());
}

// =============================================================
// P3 + Scenario D: warning precedes the inactivity logout
// =============================================================

#[test]
fn idle_deadline_shows_warning_then_warning_deadline_logs_out() {
    let h = harness();
    sign_in(&h);

    fire_pending(&h);
    assert!(h.monitor.warning_visible());
    assert!(h.monitor.profile().is_some());

    // The follow-up deadline is the short warning grace, not a fresh idle span.
    let live = pending(&h);
    assert_eq!(live.len(), 1);
    assert_eq!(h.timers.borrow().slots[live[0]].delay, WARNING_GRACE);

    fire_pending(&h);
    assert!(h.monitor.profile().is_none());
    assert!(!h.monitor.warning_visible());
    assert!(h.token.borrow().is_none());
    assert_eq!(h.redirects.borrow().as_slice(), [LOGIN_PATH]);
}

#[test]
fn warning_state_is_observed_before_logout_state() {
    let h = harness();
    sign_in(&h);
    fire_pending(&h);
    fire_pending(&h);

    let observed = h.observed.borrow();
    let warned_at = observed
        .iter()
        .position(|s| s.warning_visible && s.profile.is_some())
        .expect("warning snapshot missing");
    let logged_out_at = observed
        .iter()
        .position(|s| !s.loading && s.profile.is_none())
        .expect("logout snapshot missing");
    assert!(warned_at < logged_out_at);
}

// =============================================================
// P4: idempotent logout
// =============================================================

#[test]
fn second_logout_is_a_no_op() {
    let h = harness();
    sign_in(&h);

    h.monitor.logout();
    let after_first = h.monitor.snapshot();
    assert!(after_first.profile.is_none());
    assert!(!after_first.warning_visible);
    assert!(pending(&h).is_empty());

    h.monitor.logout();
    assert_eq!(h.monitor.snapshot(), after_first);
    assert_eq!(h.redirects.borrow().len(), 1);
    assert_eq!(h.clears.get(), 1);
}

// =============================================================
// P5: nothing mutates state after teardown
// =============================================================

#[test]
fn teardown_cancels_timers_and_listeners() {
    let h = harness();
    sign_in(&h);
    assert_eq!(pending(&h).len(), 1);

    h.monitor.teardown();
    assert!(pending(&h).is_empty());
    assert_eq!(h.activity.unsubscribed.get(), 1);
    assert!(h.activity.listeners.borrow().is_empty());
}

#[test]
fn stale_fetch_completion_after_teardown_is_discarded() {
    let h = harness();
    let ticket = h.monitor.begin_refresh();
    h.monitor.teardown();

    h.monitor.apply_profile(ticket, Some(profile()));
    assert!(h.monitor.profile().is_none());
    assert!(h.timers.borrow().slots.is_empty());
}

#[test]
fn stale_fetch_completion_after_logout_is_discarded() {
    let h = harness();
    sign_in(&h);

    // A refresh starts, then the user logs out before it resolves.
    let ticket = h.monitor.begin_refresh();
    h.monitor.logout();
    h.monitor.apply_profile(ticket, Some(profile()));

    assert!(h.monitor.profile().is_none());
    assert!(pending(&h).is_empty());
}

// =============================================================
// Scenario A: mount with no stored credential
// =============================================================

#[test]
fn uncredentialed_mount_resolves_to_anonymous() {
    let h = harness();
    assert!(h.monitor.is_loading());

    let ticket = h.monitor.begin_refresh();
    h.monitor.apply_profile(ticket, None);

    assert!(!h.monitor.is_loading());
    assert!(h.monitor.profile().is_none());
    assert!(h.timers.borrow().slots.is_empty());
    assert!(h.observed.borrow().iter().all(|s| s.profile.is_none()));
}

// =============================================================
// Scenario B: mount with valid stored credential
// =============================================================

#[test]
fn credentialed_mount_caches_profile_and_arms_idle_timer() {
    let h = harness();
    sign_in(&h);

    assert!(!h.monitor.is_loading());
    assert_eq!(h.monitor.profile().map(|p| p.id), Some("u-1".to_owned()));
    let live = pending(&h);
    assert_eq!(live.len(), 1);
    assert_eq!(h.timers.borrow().slots[live[0]].delay, IDLE_TIMEOUT);
}

// =============================================================
// Scenario C: activity just before the idle deadline resets it
// =============================================================

#[test]
fn activity_before_idle_deadline_avoids_warning() {
    let h = harness();
    sign_in(&h);

    h.activity.emit();
    assert!(!h.monitor.warning_visible());

    // The reset deadline is a fresh full idle span.
    let live = pending(&h);
    assert_eq!(live.len(), 1);
    assert_eq!(h.timers.borrow().slots[live[0]].delay, IDLE_TIMEOUT);
}

// =============================================================
// Scenario E: explicit logout while active
// =============================================================

#[test]
fn explicit_logout_cancels_timer_and_redirects() {
    let h = harness();
    sign_in(&h);

    h.monitor.logout();

    assert!(h.monitor.profile().is_none());
    assert!(pending(&h).is_empty());
    assert!(h.token.borrow().is_none());
    assert_eq!(h.redirects.borrow().as_slice(), [LOGIN_PATH]);
}

// =============================================================
// Warning is not dismissible by activity
// =============================================================

#[test]
fn activity_during_warning_neither_dismisses_nor_rearms() {
    let h = harness();
    sign_in(&h);
    fire_pending(&h);
    assert!(h.monitor.warning_visible());

    let events_before = h.timers.borrow().events.len();
    h.activity.emit();
    assert!(h.monitor.warning_visible());
    assert_eq!(h.timers.borrow().events.len(), events_before);

    fire_pending(&h);
    assert!(h.monitor.profile().is_none());
}

#[test]
fn fresh_profile_load_during_warning_restarts_the_cycle() {
    let h = harness();
    sign_in(&h);
    fire_pending(&h);
    assert!(h.monitor.warning_visible());

    let ticket = h.monitor.begin_refresh();
    h.monitor.apply_profile(ticket, Some(profile()));

    assert!(!h.monitor.warning_visible());
    let live = pending(&h);
    assert_eq!(live.len(), 1);
    assert_eq!(h.timers.borrow().slots[live[0]].delay, IDLE_TIMEOUT);
}

// =============================================================
// Refresh failure collapses to anonymous without redirecting
// =============================================================

#[test]
fn failed_refresh_clears_profile_without_redirect() {
    let h = harness();
    sign_in(&h);

    let ticket = h.monitor.begin_refresh();
    h.monitor.apply_profile(ticket, None);

    assert!(h.monitor.profile().is_none());
    assert!(pending(&h).is_empty());
    assert!(h.redirects.borrow().is_empty());
}

// =============================================================
// Credential persistence
// =============================================================

#[test]
fn save_credential_round_trips_through_the_store() {
    let h = harness();
    h.monitor.save_credential("tok-9", "admin");
    assert_eq!(h.monitor.token().as_deref(), Some("tok-9"));
}

#[test]
fn monitor_without_observer_still_transitions() {
    let timers = Rc::new(RefCell::new(TimerBox::default()));
    let monitor = SessionMonitor::new(
        Rc::new(FakeScheduler { timers: Rc::clone(&timers) }),
        Rc::new(FakeRedirector { log: Rc::new(RefCell::new(Vec::new())) }),
        Rc::new(FakeStore {
            token: Rc::new(RefCell::new(None)),
            role: Rc::new(RefCell::new(None)),
            clears: Rc::new(Cell::new(0)),
        }),
    );
    let ticket = monitor.begin_refresh();
    monitor.apply_profile(ticket, Some(profile()));
    monitor.logout();
    assert!(monitor.profile().is_none());
}
