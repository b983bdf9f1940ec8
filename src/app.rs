//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::main_layout::MainLayout;
use crate::pages::{
    blog_post::BlogPostPage, category::CategoryPage, create_post::CreatePostPage,
    dashboard::DashboardPage, edit_post::EditPostPage, edit_profile::EditProfilePage,
    forgot_password::ForgotPasswordPage, home::HomePage, landing::LandingPage, login::LoginPage,
    my_profile::MyProfilePage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage, search::SearchPage,
};
use crate::state::auth::{init_session, provide_session};

/// Root application component.
///
/// Creates the session store, kicks off the startup session check, and
/// sets up client-side routing. Protected routes sit inside
/// [`RequireAuth`]; public content pages share the [`MainLayout`]
/// chrome, while the auth screens render bare.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_session();
    init_session(auth);

    view! {
        <Title text="Bolify"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>

                <Route
                    path=StaticSegment("home")
                    view=|| {
                        view! {
                            <MainLayout>
                                <HomePage/>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("category"), ParamSegment("slug"))
                    view=|| {
                        view! {
                            <MainLayout>
                                <CategoryPage/>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("search")
                    view=|| {
                        view! {
                            <MainLayout>
                                <SearchPage/>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("blog"), ParamSegment("slug"))
                    view=|| {
                        view! {
                            <MainLayout>
                                <BlogPostPage/>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("profile"), ParamSegment("username"))
                    view=|| {
                        view! {
                            <MainLayout>
                                <ProfilePage/>
                            </MainLayout>
                        }
                    }
                />

                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <MainLayout>
                                <RequireAuth>
                                    <DashboardPage/>
                                </RequireAuth>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("create-post")
                    view=|| {
                        view! {
                            <MainLayout>
                                <RequireAuth>
                                    <CreatePostPage/>
                                </RequireAuth>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("edit-post"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <MainLayout>
                                <RequireAuth>
                                    <EditPostPage/>
                                </RequireAuth>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("my-profile")
                    view=|| {
                        view! {
                            <MainLayout>
                                <RequireAuth>
                                    <MyProfilePage/>
                                </RequireAuth>
                            </MainLayout>
                        }
                    }
                />
                <Route
                    path=StaticSegment("edit-profile")
                    view=|| {
                        view! {
                            <MainLayout>
                                <RequireAuth>
                                    <EditProfilePage/>
                                </RequireAuth>
                            </MainLayout>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
