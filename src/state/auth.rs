//! Session store: single source of truth for who is signed in.
//!
//! Lifecycle: `App` creates the state with `loading = true`, provides it
//! as an `RwSignal` context, and runs [`init_session`] exactly once. The
//! startup check settles into authenticated or anonymous; afterwards the
//! store only changes through explicit [`AuthState::login`] /
//! [`sign_out`] actions. There is no re-verification — the store trusts
//! itself until mutated.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state shared across the whole component tree.
///
/// Invariant: "authenticated" is exactly "a user is cached" — there is
/// no separate flag that could drift out of sync.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthState {
    /// State at application start: anonymous, with the startup session
    /// check still pending.
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Settle the one-time startup check. An absent user here is the
    /// expected signed-out outcome, not an error.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Transition to authenticated after a successful login call. Takes
    /// effect synchronously — no async gap between a login response and
    /// the store reflecting it.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the cached user. Backend logout is handled by [`sign_out`].
    pub fn logout(&mut self) {
        self.user = None;
    }
}

/// Create the session signal and register it in context. Called once
/// from `App`.
pub fn provide_session() -> RwSignal<AuthState> {
    let auth = RwSignal::new(AuthState::new());
    provide_context(auth);
    auth
}

/// Grab the session signal from context.
pub fn use_session() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

/// Run the startup session check: `GET /users/me` resolves the store to
/// authenticated or anonymous. A 401 is the normal signed-out case and
/// is not surfaced; other failures are logged and still resolve to
/// anonymous.
pub fn init_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::auth::current_user().await {
            Ok(user) => auth.update(|state| state.resolve(Some(user))),
            Err(err) => {
                if !err.is_unauthenticated() {
                    leptos::logging::warn!("session restore failed: {err}");
                }
                auth.update(|state| state.resolve(None));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    auth.update(|state| state.resolve(None));
}

/// Sign out: invalidate the backend session, then clear the store. The
/// two steps are fused here so callers cannot clear local state while
/// leaving the backend session alive by mistake. Local state clears
/// even if the request fails; a surviving backend cookie is re-checked
/// by [`init_session`] on the next load.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(err) = crate::net::auth::logout().await {
            leptos::logging::warn!("logout request failed: {err}");
        }
        auth.update(AuthState::logout);
    });
    #[cfg(not(feature = "csr"))]
    auth.update(AuthState::logout);
}
