//! Post detail page: the article, like control, and comments.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_section::CommentSection;
use crate::net;
use crate::net::types::{Blog, LikeState, MaybePopulated};
use crate::state::auth::use_session;

/// `/blog/:slug`.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();

    let blog = LocalResource::new(move || {
        let slug = params.get().get("slug").unwrap_or_default();
        async move { net::blogs::by_slug(&slug).await }
    });

    view! {
        <div class="blog-post">
            <Suspense fallback=move || view! { <p class="blog-post__loading">"Loading post..."</p> }>
                {move || {
                    blog.get()
                        .map(|result| match result {
                            Ok(post) => view! { <Article post=post/> }.into_any(),
                            Err(err) => {
                                view! { <p class="form-error">{err.message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// The loaded article. Like state starts from the fetched post and is
/// overridden by the latest toggle response.
#[component]
fn Article(post: Blog) -> impl IntoView {
    let auth = use_session();

    let like_override = RwSignal::new(Option::<LikeState>::None);
    let like_error = RwSignal::new(Option::<String>::None);

    let initial_likes = post.likes;
    let fetched = post.clone();

    let likes = move || like_override.get().map_or(initial_likes, |s| s.likes);
    let liked = move || {
        like_override.get().map_or_else(
            || {
                auth.get()
                    .user
                    .is_some_and(|u| fetched.liked_by_user(&u.id))
            },
            |s| s.is_liked,
        )
    };

    let like_id = post.id.clone();
    let on_like = move |_| {
        let id = like_id.clone();
        leptos::task::spawn_local(async move {
            match net::blogs::toggle_like(&id).await {
                Ok(state) => {
                    like_error.set(None);
                    like_override.set(Some(state));
                }
                Err(err) => like_error.set(Some(err.message())),
            }
        });
    };

    let author = post
        .author
        .as_ref()
        .and_then(MaybePopulated::full)
        .map(|a| a.full_name.clone())
        .unwrap_or_else(|| "Unknown author".to_owned());
    let category = post.category_name().map(str::to_owned);
    let created = post.created_at.clone().unwrap_or_default();

    view! {
        <article>
            {post
                .cover_image
                .clone()
                .map(|src| view! { <img class="blog-post__cover" src=src alt=""/> })}
            <header>
                {category.map(|name| view! { <span class="blog-post__category">{name}</span> })}
                <h1>{post.title.clone()}</h1>
                <p class="blog-post__byline">{author} " " {created}</p>
            </header>

            <div class="blog-post__body" inner_html=post.body.clone()></div>

            <div class="blog-post__actions">
                <button class="blog-post__like" class:liked=liked on:click=on_like>
                    {move || format!("{} likes", likes())}
                </button>
                {move || like_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            </div>

            <CommentSection blog_id=post.id.clone()/>
        </article>
    }
}
