//! Feed page: category filter plus the blog list.

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::net;

/// Main feed. The category slider narrows the list; the first post of
/// whatever is shown gets featured placement.
#[component]
pub fn HomePage() -> impl IntoView {
    // Selected category slug; `None` is the unfiltered feed.
    let selected = RwSignal::new(Option::<String>::None);

    let categories = LocalResource::new(|| net::categories::all());

    // Refetches whenever the selection changes.
    let blogs = LocalResource::new(move || {
        let slug = selected.get();
        async move {
            match slug {
                Some(slug) => net::categories::blogs(&slug).await,
                None => net::blogs::all().await,
            }
        }
    });

    view! {
        <div class="home">
            <div class="category-slider">
                <button
                    class:active=move || selected.get().is_none()
                    on:click=move |_| selected.set(None)
                >
                    "All"
                </button>
                <Suspense fallback=|| ()>
                    {move || {
                        categories
                            .get()
                            .map(|result| match result {
                                Ok(cats) => {
                                    cats.into_iter()
                                        .map(|c| {
                                            let slug = c.slug.clone();
                                            let active_slug = c.slug.clone();
                                            view! {
                                                <button
                                                    class:active=move || {
                                                        selected.get().as_deref()
                                                            == Some(active_slug.as_str())
                                                    }
                                                    on:click=move |_| selected.set(Some(slug.clone()))
                                                >
                                                    {c.name.clone()}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                Err(_) => ().into_any(),
                            })
                    }}
                </Suspense>
            </div>

            <Suspense fallback=move || view! { <p class="home__loading">"Loading posts..."</p> }>
                {move || {
                    blogs
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! {
                                    <div class="home__empty">
                                        <h3>"No Posts Yet"</h3>
                                        <p>
                                            "There are no posts in this category. Why not be the first?"
                                        </p>
                                    </div>
                                }
                                    .into_any()
                            }
                            Ok(list) => {
                                let mut posts = list.into_iter();
                                let featured = posts.next();
                                view! {
                                    <div class="home__feed">
                                        {featured
                                            .map(|post| {
                                                view! {
                                                    <div class="home__featured">
                                                        <BlogCard blog=post/>
                                                    </div>
                                                }
                                            })}
                                        {posts
                                            .map(|post| view! { <BlogCard blog=post/> })
                                            .collect::<Vec<_>>()}
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
