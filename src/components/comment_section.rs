//! Comment list and composer for a blog post.

use leptos::prelude::*;

use crate::net;
use crate::net::types::{Comment, MaybePopulated};
use crate::state::auth::use_session;

/// Comments under a post. The composer only shows for signed-in users.
#[component]
pub fn CommentSection(blog_id: String) -> impl IntoView {
    let auth = use_session();

    let fetch_id = blog_id.clone();
    let comments = LocalResource::new(move || {
        let id = fetch_id.clone();
        async move { net::comments::for_blog(&id).await }
    });

    let text = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let submit_id = blog_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = submit_id.clone();
        let body = text.get_untracked();
        leptos::task::spawn_local(async move {
            match net::comments::add(&id, &body).await {
                Ok(_) => {
                    text.set(String::new());
                    error.set(None);
                    comments.refetch();
                }
                Err(err) => error.set(Some(err.message())),
            }
        });
    };

    view! {
        <section class="comments">
            <h2>"Comments"</h2>

            <Show when=move || auth.get().is_authenticated()>
                <form class="comments__form" on:submit=on_submit.clone()>
                    <textarea
                        placeholder="Add a comment"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(event_target_value(&ev))
                    ></textarea>
                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <button type="submit">"Post comment"</button>
                </form>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading comments..."</p> }>
                {move || {
                    comments
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="comments__empty">"No comments yet."</p> }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="comments__list">
                                        {list
                                            .into_iter()
                                            .map(|c| view! { <CommentRow comment=c/> })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="form-error">{err.message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn CommentRow(comment: Comment) -> impl IntoView {
    let author = comment
        .author
        .as_ref()
        .and_then(MaybePopulated::full)
        .map(|a| a.full_name.clone())
        .unwrap_or_else(|| "Anonymous".to_owned());

    view! {
        <li class="comments__item">
            <span class="comments__author">{author}</span>
            <p class="comments__text">{comment.text.clone()}</p>
        </li>
    }
}
