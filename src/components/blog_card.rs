//! Card for one blog post in a feed or list.

use leptos::prelude::*;

use crate::net::types::{Blog, MaybePopulated};

/// Feed card linking to the post's detail page.
#[component]
pub fn BlogCard(blog: Blog) -> impl IntoView {
    let link = format!("/blog/{}", blog.slug);
    let author = blog
        .author
        .as_ref()
        .and_then(MaybePopulated::full)
        .map(|a| a.full_name.clone())
        .unwrap_or_else(|| "Unknown author".to_owned());
    let category = blog.category_name().map(str::to_owned);
    let cover = blog.cover_image.clone();
    let stats = format!("{} views, {} likes", blog.views, blog.likes);

    view! {
        <article class="blog-card">
            {cover.map(|src| view! { <img class="blog-card__cover" src=src alt=""/> })}
            <div class="blog-card__meta">
                {category.map(|name| view! { <span class="blog-card__category">{name}</span> })}
                <span class="blog-card__author">{author}</span>
            </div>
            <h3 class="blog-card__title">
                <a href=link>{blog.title.clone()}</a>
            </h3>
            <p class="blog-card__stats">{stats}</p>
        </article>
    }
}
