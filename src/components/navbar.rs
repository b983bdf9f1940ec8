//! Top navigation bar with search and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::search::search_query_path;
use crate::state::auth::{sign_out, use_session};

/// App navbar. Anonymous visitors get login/register links; signed-in
/// users get write, dashboard, and sign-out controls.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_session();
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());

    let search_nav = navigate.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        if !q.trim().is_empty() {
            search_nav(&search_query_path(&q), NavigateOptions::default());
        }
    };

    let logout_nav = navigate.clone();
    let on_logout = move |_| {
        sign_out(auth);
        logout_nav("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/home">
                "Bolify"
            </a>

            <form class="navbar__search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search posts and people"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </form>

            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="navbar__auth">
                            <a href="/login">"Login"</a>
                            <a class="navbar__cta" href="/register">
                                "Register"
                            </a>
                        </div>
                    }
                }
            >
                <div class="navbar__auth">
                    <a class="navbar__cta" href="/create-post">
                        "Write"
                    </a>
                    <a href="/dashboard">"Dashboard"</a>
                    <a class="navbar__user" href="/my-profile">
                        {move || auth.get().user.map(|u| u.full_name).unwrap_or_default()}
                    </a>
                    <button class="navbar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
