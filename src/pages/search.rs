//! Site search results.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::blog_card::BlogCard;
use crate::net;

/// `/search?q=`. The query lives in the URL, so results survive reloads
/// and the resource refetches whenever the query changes.
#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();

    let results = LocalResource::new(move || {
        let q = query.get().get("q").unwrap_or_default();
        async move { net::search::site(&q).await }
    });

    view! {
        <div class="search-results">
            <h1>
                {move || {
                    let q = query.get().get("q").unwrap_or_default();
                    format!("Results for \"{q}\"")
                }}
            </h1>

            <Suspense fallback=move || view! { <p>"Searching..."</p> }>
                {move || {
                    results
                        .get()
                        .map(|result| match result {
                            Ok(found) if found.blogs.is_empty() && found.users.is_empty() => {
                                view! { <p>"Nothing matched your search."</p> }.into_any()
                            }
                            Ok(found) => {
                                view! {
                                    {(!found.blogs.is_empty())
                                        .then(|| {
                                            view! {
                                                <h2>"Stories"</h2>
                                                <div class="search-results__blogs">
                                                    {found
                                                        .blogs
                                                        .into_iter()
                                                        .map(|blog| view! { <BlogCard blog=blog/> })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            }
                                        })}
                                    {(!found.users.is_empty())
                                        .then(|| {
                                            view! {
                                                <h2>"Writers"</h2>
                                                <ul class="search-results__users">
                                                    {found
                                                        .users
                                                        .into_iter()
                                                        .map(|user| {
                                                            let link = format!("/profile/{}", user.username);
                                                            view! {
                                                                <li>
                                                                    <a href=link>
                                                                        {user.full_name.clone()}
                                                                        " (@" {user.username.clone()} ")"
                                                                    </a>
                                                                </li>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            }
                                        })}
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
