//! Dashboard: the signed-in user's posts with stats and management
//! actions.

use leptos::prelude::*;

use crate::net;
use crate::net::types::{Blog, BlogStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Tab {
    #[default]
    All,
    Published,
    Drafts,
}

impl Tab {
    fn keeps(self, blog: &Blog) -> bool {
        match self {
            Tab::All => true,
            Tab::Published => blog.status == BlogStatus::Published,
            Tab::Drafts => blog.status == BlogStatus::Draft,
        }
    }
}

/// `/dashboard` (protected). Lists the user's posts, drafts included,
/// with per-post edit/delete and aggregate counters.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let blogs = LocalResource::new(|| net::users::my_blogs());
    let tab = RwSignal::new(Tab::All);
    let error = RwSignal::new(Option::<String>::None);

    let on_delete = move |id: String| {
        if !confirm_delete() {
            return;
        }
        leptos::task::spawn_local(async move {
            match net::blogs::delete(&id).await {
                Ok(()) => {
                    error.set(None);
                    blogs.refetch();
                }
                Err(err) => error.set(Some(err.message())),
            }
        });
    };

    let tab_button = move |label: &'static str, value: Tab| {
        view! {
            <button class:active=move || tab.get() == value on:click=move |_| tab.set(value)>
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"Your Stories"</h1>
                <a class="dashboard__new" href="/create-post">
                    "Write New Story"
                </a>
            </header>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            <Suspense fallback=move || view! { <p>"Loading your posts..."</p> }>
                {move || {
                    blogs
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let total_views: u64 = list.iter().map(|b| b.views).sum();
                                let total_likes: u64 = list.iter().map(|b| b.likes).sum();
                                let shown: Vec<Blog> = list
                                    .iter()
                                    .filter(|b| tab.get().keeps(b))
                                    .cloned()
                                    .collect();
                                view! {
                                    <div class="dashboard__stats">
                                        <span>{format!("{} stories", list.len())}</span>
                                        <span>{format!("{total_views} views")}</span>
                                        <span>{format!("{total_likes} likes")}</span>
                                    </div>

                                    <div class="dashboard__tabs">
                                        {tab_button("All", Tab::All)}
                                        {tab_button("Published", Tab::Published)}
                                        {tab_button("Drafts", Tab::Drafts)}
                                    </div>

                                    <ul class="dashboard__list">
                                        {shown
                                            .into_iter()
                                            .map(|blog| {
                                                view! { <PostRow blog=blog on_delete=on_delete.clone()/> }
                                            })
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
        </div>
    }
}

#[component]
fn PostRow<F>(blog: Blog, on_delete: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let edit_link = format!("/edit-post/{}", blog.id);
    let view_link = format!("/blog/{}", blog.slug);
    let delete_id = blog.id.clone();
    let delete = move |_| on_delete(delete_id.clone());

    view! {
        <li class="dashboard__row">
            <div class="dashboard__row-main">
                <a href=view_link>{blog.title.clone()}</a>
                <span class="dashboard__row-status">{blog.status.as_str()}</span>
            </div>
            <div class="dashboard__row-meta">
                <span>{format!("{} views", blog.views)}</span>
                <span>{format!("{} likes", blog.likes)}</span>
            </div>
            <div class="dashboard__row-actions">
                <a href=edit_link>"Edit"</a>
                <button on:click=delete>"Delete"</button>
            </div>
        </li>
    }
}

/// Browser confirm dialog before a permanent delete.
fn confirm_delete() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Permanently delete this post?")
                    .ok()
            })
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        true
    }
}
