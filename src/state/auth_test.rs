use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        email: Some("ada@example.com".to_owned()),
        avatar: None,
        mobile_number: None,
        is_mobile_verified: false,
    }
}

// =============================================================
// Startup state
// =============================================================

#[test]
fn new_state_is_loading() {
    let state = AuthState::new();
    assert!(state.loading);
}

#[test]
fn new_state_has_no_user() {
    let state = AuthState::new();
    assert!(state.user.is_none());
}

#[test]
fn new_state_is_not_authenticated() {
    assert!(!AuthState::new().is_authenticated());
}

#[test]
fn default_matches_new() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// Resolving the startup check
// =============================================================

#[test]
fn resolve_with_user_authenticates() {
    let mut state = AuthState::new();
    state.resolve(Some(sample_user()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn resolve_without_user_settles_anonymous() {
    let mut state = AuthState::new();
    state.resolve(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

// =============================================================
// Login / logout transitions
// =============================================================

#[test]
fn login_caches_the_user() {
    let mut state = AuthState::new();
    state.login(sample_user());
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("ada"));
}

#[test]
fn login_clears_loading() {
    // A login completing before the startup check settles still wins.
    let mut state = AuthState::new();
    state.login(sample_user());
    assert!(!state.loading);
}

#[test]
fn logout_drops_the_user() {
    let mut state = AuthState::new();
    state.login(sample_user());
    state.logout();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn login_replaces_previous_user() {
    let mut state = AuthState::new();
    state.login(sample_user());
    let mut other = sample_user();
    other.id = "u2".to_owned();
    other.username = "grace".to_owned();
    state.login(other);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u2"));
}
