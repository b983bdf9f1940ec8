//! Forgot-password page.

use leptos::prelude::*;

use crate::net;

/// Requests a password-reset email. The backend answers with a plain
/// ack either way.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        busy.set(true);
        leptos::task::spawn_local(async move {
            match net::auth::forgot_password(&email.get_untracked()).await {
                Ok(()) => sent.set(true),
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Your Password"</h1>

                <Show
                    when=move || sent.get()
                    fallback=move || {
                        view! {
                            <form on:submit=on_submit.clone()>
                                <label>
                                    "Email"
                                    <input
                                        type="email"
                                        placeholder="name@example.com"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                </label>

                                {move || {
                                    error.get().map(|msg| view! { <p class="form-error">{msg}</p> })
                                }}

                                <button type="submit" disabled=move || busy.get()>
                                    {move || if busy.get() { "Sending..." } else { "Send reset link" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <p class="auth-card__hint">
                        "If that address exists, a reset link is on its way."
                    </p>
                </Show>

                <p class="auth-card__links">
                    <a href="/login">"Back to login"</a>
                </p>
            </div>
        </div>
    }
}
