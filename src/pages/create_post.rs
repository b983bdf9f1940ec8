//! Editor page for a new post.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::image_picker::ImagePicker;
use crate::net;
use crate::net::types::{BlogDraft, BlogStatus, ImageUpload};

/// `/create-post` (protected). Multipart submit: the draft needs a
/// title, body, category, and cover image before anything is sent.
#[component]
pub fn CreatePostPage() -> impl IntoView {
    let navigate = use_navigate();

    let categories = LocalResource::new(|| net::categories::all());
    let tags = LocalResource::new(|| net::tags::all());

    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let status = RwSignal::new(BlogStatus::Draft);
    let selected_tags = RwSignal::new(Vec::<String>::new());
    let cover = RwSignal::new(Option::<ImageUpload>::None);
    let error = RwSignal::new(Option::<String>::None);
    let busy = RwSignal::new(false);

    let toggle_tag = move |id: String| {
        selected_tags.update(|current| {
            if let Some(pos) = current.iter().position(|t| *t == id) {
                current.remove(pos);
            } else {
                current.push(id);
            }
        });
    };

    let new_tag = RwSignal::new(String::new());
    let on_add_tag = move |_| {
        let name = new_tag.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match net::tags::create(&name).await {
                Ok(tag) => {
                    // Select the new tag; the refetched list renders it.
                    selected_tags.update(|current| current.push(tag.id));
                    new_tag.set(String::new());
                    tags.refetch();
                }
                Err(err) => error.set(Some(err.message())),
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let draft = BlogDraft {
                title: title.get_untracked(),
                body: body.get_untracked(),
                category: category.get_untracked(),
                status: status.get_untracked(),
                tags: selected_tags.get_untracked(),
                cover_image: cover.get_untracked(),
            };
            match net::blogs::create(&draft).await {
                Ok(blog) => {
                    navigate(&format!("/blog/{}", blog.slug), NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.message())),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="editor">
            <h1>"Write a New Story"</h1>

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

                <fieldset class="editor__tags">
                    <legend>"Tags"</legend>
                    {move || {
                        tags.get()
                            .map(|result| match result {
                                Ok(list) => {
                                    list.into_iter()
                                        .map(|t| {
                                            let toggle_id = t.id.clone();
                                            let checked_id = t.id.clone();
                                            view! {
                                                <label class="editor__tag">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            selected_tags.get().contains(&checked_id)
                                                        }
                                                        on:change=move |_| toggle_tag(toggle_id.clone())
                                                    />
                                                    {t.name.clone()}
                                                </label>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                Err(_) => ().into_any(),
                            })
                    }}
                    <div class="editor__new-tag">
                        <input
                            type="text"
                            placeholder="Add a new tag"
                            prop:value=move || new_tag.get()
                            on:input=move |ev| new_tag.set(event_target_value(&ev))
                        />
                        <button type="button" on:click=on_add_tag>
                            "Add tag"
                        </button>
                    </div>
                </fieldset>

                <label>
                    "Cover image"
                    <ImagePicker image=cover/>
                </label>

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save story" }}
                </button>
            </form>
        </div>
    }
}
