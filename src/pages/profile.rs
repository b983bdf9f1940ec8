//! Public author profile: account details plus their published posts.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::blog_card::BlogCard;
use crate::net;
use crate::net::error::ApiError;
use crate::net::types::{Blog, User};

/// `/profile/:username`. The profile lookup answers the user id the
/// posts query needs, so both run in one fetch.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let params = use_params_map();

    let profile = LocalResource::new(move || {
        let username = params.get().get("username").unwrap_or_default();
        async move { load_profile(&username).await }
    });

    view! {
        <div class="profile">
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok((user, blogs)) => {
                                view! {
                                    <header class="profile__header">
                                        {user
                                            .avatar
                                            .clone()
                                            .map(|src| {
                                                view! {
                                                    <img class="profile__avatar" src=src alt=""/>
                                                }
                                            })}
                                        <h1>{user.full_name.clone()}</h1>
                                        <p class="profile__username">
                                            {format!("@{}", user.username)}
                                        </p>
                                    </header>

                                    <h2>"Stories"</h2>
                                    {if blogs.is_empty() {
                                        view! { <p>"No stories published yet."</p> }.into_any()
                                    } else {
                                        view! {
                                            <div class="profile__posts">
                                                {blogs
                                                    .into_iter()
                                                    .map(|blog| view! { <BlogCard blog=blog/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }}
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

async fn load_profile(username: &str) -> Result<(User, Vec<Blog>), ApiError> {
    let user = net::users::profile(username).await?;
    let blogs = net::blogs::by_user(&user.id).await?;
    Ok((user, blogs))
}
