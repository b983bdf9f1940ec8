//! Editor page for an existing post.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::image_picker::ImagePicker;
use crate::net;
use crate::net::types::{Blog, BlogDraft, BlogStatus, ImageUpload, MaybePopulated};

/// `/edit-post/:id` (protected). Loads the post by id, pre-fills the
/// form, and submits a `PUT`; the cover is only replaced when a new
/// image is picked.
#[component]
pub fn EditPostPage() -> impl IntoView {
    let params = use_params_map();

    let blog = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        async move { net::blogs::by_id(&id).await }
    });

    view! {
        <div class="editor">
            <h1>"Edit Story"</h1>
            <Suspense fallback=move || view! { <p>"Loading post..."</p> }>
                {move || {
                    blog.get()
                        .map(|result| match result {
                            Ok(post) => view! { <EditForm post=post/> }.into_any(),
                            Err(err) => {
                                view! { <p class="form-error">{err.message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn EditForm(post: Blog) -> impl IntoView {
    let navigate = use_navigate();

    let categories = LocalResource::new(|| net::categories::all());

    let initial_category = post
        .category
        .as_ref()
        .map(|c| match c {
            MaybePopulated::Full(cat) => cat.id.clone(),
            MaybePopulated::Id(id) => id.clone(),
        })
        .unwrap_or_default();
    let initial_tags: Vec<String> = post
        .tags
        .iter()
        .map(|t| match t {
            MaybePopulated::Full(tag) => tag.id.clone(),
            MaybePopulated::Id(id) => id.clone(),
        })
        .collect();

    let title = RwSignal::new(post.title.clone());
    let body = RwSignal::new(post.body.clone());
    let category = RwSignal::new(initial_category);
    let status = RwSignal::new(post.status);
    let tags = RwSignal::new(initial_tags);
    let cover = RwSignal::new(Option::<ImageUpload>::None);
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let post_id = post.id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        let id = post_id.clone();
        leptos::task::spawn_local(async move {
            let draft = BlogDraft {
                title: title.get_untracked(),
                body: body.get_untracked(),
                category: category.get_untracked(),
                status: status.get_untracked(),
                tags: tags.get_untracked(),
                cover_image: cover.get_untracked(),
            };
            match net::blogs::update(&id, &draft).await {
                Ok(updated) => {
                    navigate(&format!("/blog/{}", updated.slug), NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    view! {
        <form on:submit=on_submit>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Body"
                <textarea
                    rows="12"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label>
                "Category"
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {move || {
                        categories
                            .get()
                            .map(|result| match result {
                                Ok(cats) => {
                                    cats.into_iter()
                                        .map(|c| {
                                            view! {
                                                <option value=c.id.clone()>{c.name.clone()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                Err(_) => ().into_any(),
                            })
                    }}
                </select>
            </label>

            <label>
                "Status"
                <select
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| status.set(BlogStatus::parse(&event_target_value(&ev)))
                >
                    <option value="draft">"Draft"</option>
                    <option value="published">"Published"</option>
                </select>
            </label>

            <label>
                "Replace cover image"
                <ImagePicker image=cover/>
            </label>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save changes" }}
            </button>
        </form>
    }
}
