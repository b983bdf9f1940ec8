//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::google_signin::GoogleSignIn;
use crate::net;
use crate::state::auth::use_session;

/// Email/password login, plus Google sign-in. A successful response
/// updates the session store synchronously, then navigates to the feed.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_session();
    let navigate = use_navigate();

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
            match net::auth::login(&email.get_untracked(), &password.get_untracked()).await {
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
                <h1>"Login to Your Account"</h1>
                <p class="auth-card__hint">"Enter your credentials to access your account."</p>

                <form on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="name@example.com"
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
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <div class="auth-card__divider">"or"</div>
                <GoogleSignIn on_credential=on_google/>

                <p class="auth-card__links">
                    "No account yet? " <a href="/register">"Register here"</a>
                </p>
                <p class="auth-card__links">
                    "Forgot your password? " <a href="/forgot-password">"Reset it here"</a>
                </p>
            </div>
        </div>
    }
}
