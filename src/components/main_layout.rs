//! Shared page chrome: navbar above, footer below.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Layout wrapper for the routed app pages.
#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__content">{children()}</main>
            <footer class="layout__footer">
                <p>"Bolify - stories worth telling."</p>
            </footer>
        </div>
    }
}
