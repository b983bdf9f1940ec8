//! Route guard for session-gated views.
//!
//! The guard consults the session store — the same authority every other
//! consumer uses — and waits for the startup check to settle before
//! deciding. There is no second cookie-derived signal to disagree with.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, use_session};

/// What happens to a navigation into a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The startup session check has not settled; withhold the view.
    Pending,
    /// Render the protected view.
    Allow,
    /// Send the visitor to the login page, replacing the history entry
    /// so back navigation does not land on the guarded page.
    Redirect,
}

/// Pure guard decision over the session state.
pub fn evaluate(auth: &AuthState) -> GuardOutcome {
    if auth.loading {
        GuardOutcome::Pending
    } else if auth.is_authenticated() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect
    }
}

/// Wraps a protected view. Shows a placeholder until the session check
/// settles, then either renders the children or redirects to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_session();
    let navigate = use_navigate();

    Effect::new(move || {
        if evaluate(&auth.get()) == GuardOutcome::Redirect {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || evaluate(&auth.get()) == GuardOutcome::Allow
            fallback=|| view! { <p class="guard-pending">"Checking your session..."</p> }
        >
            {children()}
        </Show>
    }
}
