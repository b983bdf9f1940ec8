//! The signed-in user's own profile with aggregate stats.

use leptos::prelude::*;

use crate::net;
use crate::state::auth::use_session;

/// `/my-profile` (protected). Account details come from the session
/// store; the stat counters are fetched fresh.
#[component]
pub fn MyProfilePage() -> impl IntoView {
    let auth = use_session();
    let stats = LocalResource::new(|| net::users::my_stats());

    view! {
        <div class="profile profile--own">
            {move || {
                auth.get()
                    .user
                    .map(|user| {
                        view! {
                            <header class="profile__header">
                                {user
                                    .avatar
                                    .clone()
                                    .map(|src| {
                                        view! { <img class="profile__avatar" src=src alt=""/> }
                                    })}
                                <h1>{user.full_name.clone()}</h1>
                                <p class="profile__username">{format!("@{}", user.username)}</p>
                                {user.email.clone().map(|email| view! { <p>{email}</p> })}
                                {user
                                    .mobile_number
                                    .clone()
                                    .map(|number| {
                                        let badge = if user.is_mobile_verified {
                                            "verified"
                                        } else {
                                            "unverified"
                                        };
                                        view! {
                                            <p class="profile__mobile">
                                                {number} " (" {badge} ")"
                                            </p>
                                        }
                                    })}
                                <a class="profile__edit" href="/edit-profile">
                                    "Edit profile"
                                </a>
                            </header>
                        }
                    })
            }}

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => {
                                view! {
                                    <div class="profile__stats">
                                        <span>{format!("{} stories", stats.total_posts)}</span>
                                        <span>{format!("{} views", stats.total_views)}</span>
                                        <span>{format!("{} likes", stats.total_likes)}</span>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="form-error">{err.message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
