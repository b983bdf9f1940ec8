//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::google_signin::GoogleSignIn;
use crate::net;
use crate::state::auth::use_session;

/// Account creation, with Google sign-up as an alternative.
/// Registration signs the user in directly (the backend sets the
/// session cookie on success).
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_session();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let google_nav = navigate.clone();
    let on_google = Callback::new(move |credential: String| {
        error.set(None);
        let navigate = google_nav.clone();
        leptos::task::spawn_local(async move {
            match net::auth::google_login(&credential).await {
                Ok(user) => {
                    auth.update(|state| state.login(user));
                    navigate("/home", NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.message())),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = net::auth::register(
                &full_name.get_untracked(),
                &username.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;
            match result {
                Ok(user) => {
                    auth.update(|state| state.login(user));
                    navigate("/home", NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Your Account"</h1>

                <form on:submit=on_submit>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Username"
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                    <button type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <div class="auth-card__divider">"or"</div>
                <GoogleSignIn on_credential=on_google/>

                <p class="auth-card__links">
                    "Already have an account? " <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
