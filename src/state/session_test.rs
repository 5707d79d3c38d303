use super::*;

fn profile(role: &str) -> Profile {
    Profile {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.org".to_owned(),
        role: role.to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_anonymous_and_loading() {
    let state = SessionState::default();
    assert!(state.profile.is_none());
    assert!(state.loading);
    assert!(!state.warning_visible);
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

// =============================================================
// Phase derivation
// =============================================================

#[test]
fn profile_without_warning_is_active() {
    let state = SessionState { profile: Some(profile("user")), loading: false, warning_visible: false };
    assert_eq!(state.phase(), SessionPhase::Active);
}

#[test]
fn profile_with_warning_is_warning() {
    let state = SessionState { profile: Some(profile("user")), loading: false, warning_visible: true };
    assert_eq!(state.phase(), SessionPhase::Warning);
}

#[test]
fn no_profile_is_anonymous_even_with_warning_flag() {
    let state = SessionState { profile: None, loading: false, warning_visible: true };
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

// =============================================================
// Role gating
// =============================================================

#[test]
fn admin_profile_is_admin() {
    let state = SessionState { profile: Some(profile("admin")), loading: false, warning_visible: false };
    assert!(state.is_admin());
}

#[test]
fn regular_profile_is_not_admin() {
    let state = SessionState { profile: Some(profile("user")), loading: false, warning_visible: false };
    assert!(!state.is_admin());
}

#[test]
fn anonymous_is_not_admin() {
    let state = SessionState { profile: None, loading: false, warning_visible: false };
    assert!(!state.is_admin());
}
