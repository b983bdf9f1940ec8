//! Public landing page.

use leptos::prelude::*;

/// Marketing page shown at `/` for visitors who have not entered the
/// app yet.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="landing__nav">
                <a class="landing__brand" href="/">
                    "Bolify"
                </a>
                <div class="landing__nav-links">
                    <a href="/login">"Login"</a>
                    <a class="landing__cta" href="/register">
                        "Get Started"
                    </a>
                </div>
            </nav>

            <header class="landing__hero">
                <h1>"Where good stories find their readers"</h1>
                <p>
                    "Write, publish, and grow an audience. Bolify gives your ideas a home and your readers a feed worth opening."
                </p>
                <div class="landing__actions">
                    <a class="landing__cta" href="/register">
                        "Start writing"
                    </a>
                    <a href="/home">"Browse the feed"</a>
                </div>
            </header>

            <section class="landing__features">
                <div class="landing__feature">
                    <h3>"A focused editor"</h3>
                    <p>"Drafts, cover images, categories and tags without the clutter."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Readers who care"</h3>
                    <p>"Likes and comments from people reading the same topics you write about."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Your numbers"</h3>
                    <p>"Views and likes per post, collected on your dashboard."</p>
                </div>
            </section>
        </div>
    }
}
