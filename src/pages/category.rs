//! Feed filtered to a single category, addressed by slug.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::blog_card::BlogCard;
use crate::net;

/// `/category/:slug`. The heading prefers the populated category name
/// from the first post and falls back to the raw slug.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let params = use_params_map();

    let blogs = LocalResource::new(move || {
        let slug = params.get().get("slug").unwrap_or_default();
        async move { net::categories::blogs(&slug).await }
    });

    view! {
        <div class="category-feed">
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    blogs
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No stories in this category yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                let heading = list
                                    .first()
                                    .and_then(|b| b.category_name().map(ToOwned::to_owned))
                                    .unwrap_or_else(|| {
                                        params.get_untracked().get("slug").unwrap_or_default()
                                    });
                                view! {
                                    <h1>{heading}</h1>
                                    <div class="category-feed__list">
                                        {list
                                            .into_iter()
                                            .map(|blog| view! { <BlogCard blog=blog/> })
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
