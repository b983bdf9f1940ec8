use super::*;

use crate::net::types::User;

fn signed_in() -> AuthState {
    let mut state = AuthState::new();
    state.login(User {
        id: "u1".to_owned(),
        username: "ada".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        email: None,
        avatar: None,
        mobile_number: None,
        is_mobile_verified: false,
    });
    state
}

// =============================================================
// Guard decision table
// =============================================================

#[test]
fn pending_while_startup_check_runs() {
    let state = AuthState::new();
    assert_eq!(evaluate(&state), GuardOutcome::Pending);
}

#[test]
fn allow_when_authenticated() {
    assert_eq!(evaluate(&signed_in()), GuardOutcome::Allow);
}

#[test]
fn redirect_when_settled_anonymous() {
    let mut state = AuthState::new();
    state.resolve(None);
    assert_eq!(evaluate(&state), GuardOutcome::Redirect);
}

#[test]
fn loading_outranks_a_cached_user() {
    // Never render a protected view on a stale user while re-checking.
    let mut state = signed_in();
    state.loading = true;
    assert_eq!(evaluate(&state), GuardOutcome::Pending);
}

#[test]
fn redirect_after_logout() {
    let mut state = signed_in();
    state.logout();
    assert_eq!(evaluate(&state), GuardOutcome::Redirect);
}
