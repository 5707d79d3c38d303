//! Session state snapshot owned by the session monitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware chrome read this through the context
//! signal; all writes go through `session::SessionMonitor`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Profile;

/// Lifecycle phase of the signed-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No profile present: before login, or after logout/expiry.
    Anonymous,
    /// Profile present, idle deadline not yet reached.
    Active,
    /// Profile present and the idle deadline has fired; forced logout is
    /// pending unless a fresh profile load restarts the cycle.
    Warning,
}

/// Snapshot of the session: cached profile, initial-load flag, and the
/// expiry-warning visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Present iff a valid session exists.
    pub profile: Option<Profile>,
    /// True only during the initial profile fetch after mount; never set
    /// again afterwards.
    pub loading: bool,
    /// True while the "session about to expire" notice is displayed.
    pub warning_visible: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { profile: None, loading: true, warning_visible: false }
    }
}

impl SessionState {
    /// Current lifecycle phase derived from the snapshot fields.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.profile, self.warning_visible) {
            (Some(_), true) => SessionPhase::Warning,
            (Some(_), false) => SessionPhase::Active,
            (None, _) => SessionPhase::Anonymous,
        }
    }

    /// Whether the signed-in profile may manage user accounts.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(crate::net::types::Profile::is_admin)
    }
}
